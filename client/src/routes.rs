//! Route table and access classification.
//!
//! Every navigable path maps to one `AppRoute`; each route carries the class
//! the guards act on. Paths outside the table are unmatched and the app
//! sends them to `/`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
/// Default landing view for signed-in users.
pub const LANDING_PATH: &str = "/dashboard";

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Visible in every auth state.
    Unguarded,
    /// Entry views for signed-out users only (login, signup).
    Public,
    /// Requires a session.
    Protected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Signup,
    Dashboard,
    Recipes,
    NewRecipe,
    Recipe(String),
    Restaurants,
    NewRestaurant,
    Restaurant(String),
    Discover,
    Profile,
}

impl AppRoute {
    /// Match a request path. Query strings, fragments and one trailing slash
    /// are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path
            .strip_suffix('/')
            .filter(|p| !p.is_empty() && !p.ends_with('/'))
            .unwrap_or(path);
        let rest = path.strip_prefix('/')?;
        let segments: Vec<&str> = if rest.is_empty() { Vec::new() } else { rest.split('/').collect() };
        if segments.iter().any(|s| s.is_empty()) {
            return None;
        }
        let route = match segments.as_slice() {
            [] => Self::Home,
            ["login"] => Self::Login,
            ["signup"] => Self::Signup,
            ["dashboard"] => Self::Dashboard,
            ["recipes"] => Self::Recipes,
            ["recipes", "new"] => Self::NewRecipe,
            ["recipes", id] => Self::Recipe((*id).to_owned()),
            ["restaurants"] => Self::Restaurants,
            ["restaurants", "new"] => Self::NewRestaurant,
            ["restaurants", id] => Self::Restaurant((*id).to_owned()),
            ["discover"] => Self::Discover,
            ["profile"] => Self::Profile,
            _ => return None,
        };
        Some(route)
    }

    #[must_use]
    pub fn class(&self) -> RouteClass {
        match self {
            Self::Home => RouteClass::Unguarded,
            Self::Login | Self::Signup => RouteClass::Public,
            Self::Dashboard
            | Self::Recipes
            | Self::NewRecipe
            | Self::Recipe(_)
            | Self::Restaurants
            | Self::NewRestaurant
            | Self::Restaurant(_)
            | Self::Discover
            | Self::Profile => RouteClass::Protected,
        }
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => ROOT_PATH.to_owned(),
            Self::Login => LOGIN_PATH.to_owned(),
            Self::Signup => SIGNUP_PATH.to_owned(),
            Self::Dashboard => LANDING_PATH.to_owned(),
            Self::Recipes => "/recipes".to_owned(),
            Self::NewRecipe => "/recipes/new".to_owned(),
            Self::Recipe(id) => format!("/recipes/{id}"),
            Self::Restaurants => "/restaurants".to_owned(),
            Self::NewRestaurant => "/restaurants/new".to_owned(),
            Self::Restaurant(id) => format!("/restaurants/{id}"),
            Self::Discover => "/discover".to_owned(),
            Self::Profile => "/profile".to_owned(),
        }
    }
}
