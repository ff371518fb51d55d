//! Profile page showing the signed-in identity.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::navbar::avatar_initial;
use crate::state::auth::AppAuth;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<AppAuth>();
    let state = auth.state();
    let on_logout = move |_| auth.logout();

    let details = move || match state.with(|s| s.user().cloned()) {
        Some(identity) => view! {
            <div class="profile__avatar">{avatar_initial(&identity.username)}</div>
            <dl class="profile__details">
                <dt>"Username"</dt>
                <dd>{identity.username}</dd>
                <dt>"Email"</dt>
                <dd>{identity.email}</dd>
                <dt>"Member id"</dt>
                <dd>{identity.id}</dd>
            </dl>
        }
        .into_any(),
        None => ().into_any(),
    };

    view! {
        <section class="profile">
            <h1>"Profile"</h1>
            {details}
            <button class="profile__logout" on:click=on_logout>"Logout"</button>
        </section>
    }
}
