//! Root application component with routing and the auth context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `AppAuth` for the whole tree. The state starts pending
//! on both server and client so the hydrated markup matches the SSR output;
//! an effect (client only) then resolves it from durable storage.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guard::{ProtectedRoute, PublicRoute};
use crate::components::navbar::Navbar;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::section::{
    DiscoverPage, NewRecipePage, NewRestaurantPage, RecipeDetailPage, RecipesPage, RestaurantDetailPage,
    RestaurantsPage,
};
use crate::pages::signup::SignupPage;
use crate::state::auth::AppAuth;
use crate::util::auth::RedirectTarget;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AppAuth::browser();
    provide_context(auth.clone());
    Effect::new(move || auth.resolve());

    view! {
        <Stylesheet id="leptos" href="/pkg/taste.css"/>
        <Title text="Taste"/>

        <Router>
            <Navbar/>
            <main class="main">
                <Routes fallback=|| view! { <Redirect path=RedirectTarget::Root.path()/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }/>
                    <Route path=StaticSegment("signup") view=|| view! { <PublicRoute><SignupPage/></PublicRoute> }/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("recipes")
                        view=|| view! { <ProtectedRoute><RecipesPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("recipes"), StaticSegment("new"))
                        view=|| view! { <ProtectedRoute><NewRecipePage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("recipes"), ParamSegment("id"))
                        view=|| view! { <ProtectedRoute><RecipeDetailPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("restaurants")
                        view=|| view! { <ProtectedRoute><RestaurantsPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("restaurants"), StaticSegment("new"))
                        view=|| view! { <ProtectedRoute><NewRestaurantPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("restaurants"), ParamSegment("id"))
                        view=|| view! { <ProtectedRoute><RestaurantDetailPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("discover")
                        view=|| view! { <ProtectedRoute><DiscoverPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
