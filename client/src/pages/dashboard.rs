//! Dashboard page, the signed-in landing view.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::navbar::{NAV_ITEMS, NEW_RECIPE_PATH};
use crate::net::types::Identity;
use crate::state::auth::AppAuth;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<AppAuth>().state();
    let heading = move || state.with(|s| greeting(s.user()));

    let shortcuts = NAV_ITEMS
        .iter()
        .skip(1)
        .map(|&(label, path)| view! { <a href=path class="dashboard__card">{label}</a> })
        .collect_view();

    view! {
        <section class="dashboard">
            <h1>{heading}</h1>
            <div class="dashboard__cards">
                {shortcuts}
                <a href=NEW_RECIPE_PATH class="dashboard__card dashboard__card--primary">"Add a Recipe"</a>
            </div>
        </section>
    }
}

pub fn greeting(identity: Option<&Identity>) -> String {
    match identity {
        Some(identity) if !identity.username.trim().is_empty() => {
            format!("Welcome back, {}!", identity.username.trim())
        }
        _ => "Welcome back!".to_owned(),
    }
}
