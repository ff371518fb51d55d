//! Home page, reachable in every auth state.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::routes::{LANDING_PATH, LOGIN_PATH, SIGNUP_PATH};
use crate::state::auth::{AppAuth, AuthState};

#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppAuth>().state();

    let actions = move || {
        state
            .with(home_actions)
            .iter()
            .map(|&(label, href)| view! { <a href=href class="home__action">{label}</a> })
            .collect_view()
    };

    view! {
        <section class="home">
            <h1 class="home__title">"Taste"</h1>
            <p class="home__tagline">"Share recipes, find restaurants, discover what your friends are eating."</p>
            <div class="home__actions">{actions}</div>
        </section>
    }
}

/// Calls to action for the current state, as `(label, path)`. Nothing is
/// offered until the session is known.
pub fn home_actions(state: &AuthState) -> &'static [(&'static str, &'static str)] {
    match state {
        AuthState::Pending => &[],
        AuthState::SignedIn(_) => &[("Go to Dashboard", LANDING_PATH)],
        AuthState::SignedOut => &[("Get Started", SIGNUP_PATH), ("Sign In", LOGIN_PATH)],
    }
}
