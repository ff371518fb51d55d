//! Signup page: account registration.
//!
//! Registration does not sign the user in. On success the form is cleared
//! and the confirmation is shown with a link to the login page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::net::types::SignupRequest;
use crate::routes::LOGIN_PATH;
use crate::state::auth::AppAuth;

pub const USERNAME_MAX: usize = 50;
pub const EMAIL_MAX: usize = 100;
pub const PASSWORD_MAX: usize = 120;
pub const NAME_MAX: usize = 100;

/// Raw field values as typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<AppAuth>();
    let form = RwSignal::new(SignupForm::default());
    let error = RwSignal::new(String::new());
    let confirmation = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_signup_input(&form.get()) {
            Ok(request) => request,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        confirmation.set(None);

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                match auth.signup(&request).await {
                    Ok(resp) => {
                        leptos::logging::log!("registered {}", request.username);
                        form.set(SignupForm::default());
                        confirmation.set(Some(resp.message));
                    }
                    Err(e) => {
                        leptos::logging::warn!("signup failed: {e}");
                        error.set(e.to_string());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, request);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {text_field(form, "text", "Username", |f| &f.username, |f, v| f.username = v)}
                    {text_field(form, "email", "Email", |f| &f.email, |f, v| f.email = v)}
                    {text_field(form, "text", "First name (optional)", |f| &f.first_name, |f, v| f.first_name = v)}
                    {text_field(form, "text", "Last name (optional)", |f| &f.last_name, |f, v| f.last_name = v)}
                    {text_field(form, "password", "Password", |f| &f.password, |f, v| f.password = v)}
                    {text_field(form, "password", "Confirm password", |f| &f.confirm_password, |f, v| f.confirm_password = v)}
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error" role="alert">{move || error.get()}</p>
                </Show>
                <Show when=move || confirmation.get().is_some()>
                    <p class="auth-message auth-message--success">
                        {move || confirmation.get().unwrap_or_default()}
                        " "
                        <a href=LOGIN_PATH>"Sign in now"</a>
                    </p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href=LOGIN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

/// Check the form and build the request body.
///
/// Username and email are trimmed; optional names become `None` when blank.
/// Limits follow the API's user model.
pub fn validate_signup_input(form: &SignupForm) -> Result<SignupRequest, &'static str> {
    let username = form.username.trim();
    let email = form.email.trim();
    if username.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("Username, email and password are required.");
    }
    if username.chars().count() > USERNAME_MAX {
        return Err("Username must be at most 50 characters.");
    }
    if email.chars().count() > EMAIL_MAX || !is_plausible_email(email) {
        return Err("Enter a valid email address.");
    }
    if form.password.chars().count() > PASSWORD_MAX {
        return Err("Password must be at most 120 characters.");
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match.");
    }
    let first_name = optional_name(&form.first_name);
    let last_name = optional_name(&form.last_name);
    if [&first_name, &last_name].into_iter().flatten().any(|n| n.chars().count() > NAME_MAX) {
        return Err("Names must be at most 100 characters.");
    }
    Ok(SignupRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        first_name,
        last_name,
    })
}

/// One input bound to a single form field.
fn text_field(
    form: RwSignal<SignupForm>,
    kind: &'static str,
    placeholder: &'static str,
    get: fn(&SignupForm) -> &String,
    set: fn(&mut SignupForm, String),
) -> impl IntoView {
    view! {
        <input
            class="auth-input"
            type=kind
            placeholder=placeholder
            prop:value=move || form.with(|f| get(f).clone())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| set(f, value));
            }
        />
    }
}

fn optional_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
