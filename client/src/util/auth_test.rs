use super::*;
use crate::net::types::Identity;
use crate::routes::AppRoute;

const PROTECTED_PATHS: [&str; 9] = [
    "/dashboard",
    "/recipes",
    "/recipes/new",
    "/recipes/12",
    "/restaurants",
    "/restaurants/new",
    "/restaurants/3",
    "/discover",
    "/profile",
];

const PUBLIC_PATHS: [&str; 2] = ["/login", "/signup"];

/// Classify a path through the route table, then apply the policy.
fn decision_for(state: &AuthState, path: &str) -> Decision {
    let route = AppRoute::parse(path).unwrap_or_else(|| panic!("{path} is not in the route table"));
    authorize(state, route.class())
}

fn signed_in() -> AuthState {
    AuthState::SignedIn(Identity { id: 1, username: "a".to_owned(), email: "a@x.com".to_owned() })
}

#[test]
fn protected_redirects_to_login_without_session() {
    for path in PROTECTED_PATHS {
        assert_eq!(
            decision_for(&AuthState::SignedOut, path),
            Decision::Redirect(RedirectTarget::Login),
            "{path}"
        );
    }
}

#[test]
fn protected_renders_with_session() {
    for path in PROTECTED_PATHS {
        assert_eq!(decision_for(&signed_in(), path), Decision::Render, "{path}");
    }
}

#[test]
fn public_redirects_to_landing_with_session() {
    for path in PUBLIC_PATHS {
        assert_eq!(decision_for(&signed_in(), path), Decision::Redirect(RedirectTarget::Landing), "{path}");
    }
}

#[test]
fn public_renders_without_session() {
    for path in PUBLIC_PATHS {
        assert_eq!(decision_for(&AuthState::SignedOut, path), Decision::Render, "{path}");
    }
}

#[test]
fn pending_never_redirects_classified_paths() {
    for path in PROTECTED_PATHS.iter().chain(PUBLIC_PATHS.iter()) {
        assert_eq!(decision_for(&AuthState::Pending, path), Decision::Loading, "{path}");
    }
}

#[test]
fn home_renders_in_every_state() {
    for state in [AuthState::Pending, AuthState::SignedOut, signed_in()] {
        assert_eq!(decision_for(&state, "/"), Decision::Render);
    }
}

#[test]
fn root_target_is_home_path() {
    assert_eq!(RedirectTarget::Root.path(), "/");
    assert_eq!(AppRoute::parse(RedirectTarget::Root.path()), Some(AppRoute::Home));
}

#[test]
fn recipes_without_session_goes_to_login_path() {
    let Decision::Redirect(target) = decision_for(&AuthState::SignedOut, "/recipes") else {
        panic!("expected redirect");
    };
    assert_eq!(target.path(), "/login");
}

#[test]
fn login_with_session_goes_to_dashboard_path() {
    let Decision::Redirect(target) = decision_for(&signed_in(), "/login") else {
        panic!("expected redirect");
    };
    assert_eq!(target.path(), "/dashboard");
}

#[test]
fn logout_flips_protected_decision() {
    let mut state = signed_in();
    assert_eq!(authorize(&state, RouteClass::Protected), Decision::Render);
    state = AuthState::SignedOut;
    assert_eq!(authorize(&state, RouteClass::Protected), Decision::Redirect(RedirectTarget::Login));
}
