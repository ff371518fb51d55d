//! Route guards wrapping protected and public views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each guard derives a memoized decision from the auth signal, so a mounted
//! view is re-evaluated whenever the session changes (logout on a protected
//! page redirects to `/login` without a remount).

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Redirect;

use crate::components::loading::Loading;
use crate::routes::RouteClass;
use crate::state::auth::{AppAuth, AuthState};
use crate::util::auth::{Decision, authorize};

/// Renders `children` only for a signed-in user; otherwise redirects to `/login`.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded(RouteClass::Protected, children)
}

/// Renders `children` only for a signed-out user; otherwise redirects to the
/// signed-in landing view.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    guarded(RouteClass::Public, children)
}

/// Decision for a view of `class`, recomputed whenever the auth state changes.
pub fn guard_decision(state: RwSignal<AuthState>, class: RouteClass) -> Memo<Decision> {
    Memo::new(move |_| state.with(|s| authorize(s, class)))
}

fn guarded(class: RouteClass, children: ChildrenFn) -> impl IntoView {
    let decision = guard_decision(expect_context::<AppAuth>().state(), class);
    move || match decision.get() {
        Decision::Loading => view! { <Loading/> }.into_any(),
        Decision::Render => children(),
        Decision::Redirect(target) => view! { <Redirect path=target.path()/> }.into_any(),
    }
}
