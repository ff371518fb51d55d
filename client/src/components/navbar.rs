//! Top navigation bar.
//!
//! Signed-in users get the section links, a create shortcut and the profile
//! menu; signed-out users get login and signup entry points. While the
//! session is pending only the brand is shown.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_location;

use crate::routes::{LANDING_PATH, LOGIN_PATH, ROOT_PATH, SIGNUP_PATH};
use crate::state::auth::{AppAuth, AuthState};

/// Section links shown to signed-in users, as `(label, path)`.
pub const NAV_ITEMS: [(&str, &str); 4] = [
    ("Dashboard", LANDING_PATH),
    ("Recipes", "/recipes"),
    ("Restaurants", "/restaurants"),
    ("Discover", "/discover"),
];

pub const NEW_RECIPE_PATH: &str = "/recipes/new";
pub const PROFILE_PATH: &str = "/profile";

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<AppAuth>();
    let state = auth.state();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    // The link itself navigates to `/` once the session is gone.
    let on_logout = Callback::new(move |()| {
        menu_open.set(false);
        auth.logout();
    });

    let links = move || {
        let current = pathname.get();
        NAV_ITEMS
            .iter()
            .map(|&(label, path)| {
                let class = nav_link_class(&current, path);
                view! { <a href=path class=class>{label}</a> }
            })
            .collect_view()
    };

    let auth_area = move || match state.get() {
        AuthState::Pending => ().into_any(),
        AuthState::SignedOut => view! {
            <div class="navbar__auth">
                <a href=LOGIN_PATH class="navbar__button">"Login"</a>
                <a href=SIGNUP_PATH class="navbar__button navbar__button--outlined">"Sign Up"</a>
            </div>
        }
        .into_any(),
        AuthState::SignedIn(identity) => view! {
            <div class="navbar__links">{links}</div>
            <a href=NEW_RECIPE_PATH class="navbar__icon-button" title="Add Recipe">"+"</a>
            <div class="navbar__profile">
                <button
                    class="navbar__avatar"
                    title=identity.username.clone()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {avatar_initial(&identity.username)}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="navbar__menu" role="menu">
                        <a href=PROFILE_PATH role="menuitem" on:click=move |_| menu_open.set(false)>
                            "Profile"
                        </a>
                        <a href=ROOT_PATH role="menuitem" on:click=move |_| on_logout.run(())>
                            "Logout"
                        </a>
                    </div>
                </Show>
            </div>
        }
        .into_any(),
    };

    view! {
        <header class="navbar">
            <a href=ROOT_PATH class="navbar__brand">"Taste"</a>
            <span class="navbar__spacer"></span>
            {auth_area}
        </header>
    }
}

/// Uppercase first character of the username, or `?` when empty.
pub fn avatar_initial(username: &str) -> String {
    username
        .trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

/// Exact path match; the navbar does not highlight parents of nested views.
pub fn is_active(current: &str, path: &str) -> bool {
    current == path
}

fn nav_link_class(current: &str, path: &str) -> &'static str {
    if is_active(current, path) {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    }
}
