//! Recipe, restaurant and discovery views.
//!
//! These pages only consume the session gate: each one is mounted behind
//! `ProtectedRoute` and renders a titled placeholder for its section.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::navbar::NEW_RECIPE_PATH;

pub const NEW_RESTAURANT_PATH: &str = "/restaurants/new";

/// Kind of entity a detail view shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Recipe,
    Restaurant,
}

impl Entity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Recipe => "Recipe",
            Self::Restaurant => "Restaurant",
        }
    }
}

#[component]
fn Section(
    title: &'static str,
    blurb: &'static str,
    #[prop(optional)] action: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <section class="section">
            <header class="section__header">
                <h1>{title}</h1>
                {action.map(|(label, href)| view! { <a href=href class="section__action">{label}</a> })}
            </header>
            <p class="section__blurb">{blurb}</p>
        </section>
    }
}

#[component]
pub fn RecipesPage() -> impl IntoView {
    view! {
        <Section
            title="Recipes"
            blurb="Recipes shared by you and the people you follow."
            action=("Add Recipe", NEW_RECIPE_PATH)
        />
    }
}

#[component]
pub fn NewRecipePage() -> impl IntoView {
    view! { <Section title="New Recipe" blurb="Write down ingredients and steps, then share it."/> }
}

#[component]
pub fn RecipeDetailPage() -> impl IntoView {
    view! { <EntityDetail entity=Entity::Recipe/> }
}

#[component]
pub fn RestaurantsPage() -> impl IntoView {
    view! {
        <Section
            title="Restaurants"
            blurb="Places you have been and places you want to try."
            action=("Add Restaurant", NEW_RESTAURANT_PATH)
        />
    }
}

#[component]
pub fn NewRestaurantPage() -> impl IntoView {
    view! { <Section title="New Restaurant" blurb="Add a place and tell others what to order."/> }
}

#[component]
pub fn RestaurantDetailPage() -> impl IntoView {
    view! { <EntityDetail entity=Entity::Restaurant/> }
}

#[component]
pub fn DiscoverPage() -> impl IntoView {
    view! { <Section title="Discover" blurb="Trending recipes and restaurants from the community."/> }
}

#[component]
fn EntityDetail(entity: Entity) -> impl IntoView {
    let params = use_params_map();
    let title = move || detail_title(entity, params.with(|p| p.get("id")).as_deref());

    view! {
        <section class="section section--detail">
            <h1>{title}</h1>
        </section>
    }
}

/// Heading for a detail view; a missing id renders the bare label.
pub fn detail_title(entity: Entity, id: Option<&str>) -> String {
    match id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => format!("{} #{id}", entity.label()),
        None => entity.label().to_owned(),
    }
}
