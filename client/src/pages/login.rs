//! Login page: identifier + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `PublicRoute`. A successful sign-in flips the auth state to
//! signed-in and the guard then redirects to the landing view, so this page
//! never navigates on its own.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::Credentials;
use crate::routes::SIGNUP_PATH;
use crate::state::auth::AppAuth;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AppAuth>();
    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&identifier.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = auth.login(&credentials).await {
                    leptos::logging::warn!("sign-in failed: {e}");
                    error.set(e.to_string());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, credentials);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username or email"
                        autocomplete="username"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error" role="alert">{move || error.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href=SIGNUP_PATH>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}

/// Trim the identifier and require both fields. The password is sent as typed.
pub fn validate_login_input(identifier: &str, password: &str) -> Result<Credentials, &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() || password.is_empty() {
        return Err("Enter your username or email and password.");
    }
    Ok(Credentials { identifier: identifier.to_owned(), password: password.to_owned() })
}
