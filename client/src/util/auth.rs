//! Route authorization policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guard components and the navbar apply identical redirect behavior. The
//! decision is a pure function of the auth state and the route class so it
//! can be evaluated without a rendering environment; components only apply
//! the result.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::routes::{LANDING_PATH, LOGIN_PATH, ROOT_PATH, RouteClass};
use crate::state::auth::AuthState;

/// Where a redirect sends the user. `Root` is the target for paths outside
/// the route table, in every auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Landing,
    Root,
}

impl RedirectTarget {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Landing => LANDING_PATH,
            Self::Root => ROOT_PATH,
        }
    }
}

/// Outcome of one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Session not resolved yet: show the placeholder, do not redirect.
    Loading,
    Render,
    Redirect(RedirectTarget),
}

/// Decide whether a view of `class` may render in `state`.
#[must_use]
pub fn authorize(state: &AuthState, class: RouteClass) -> Decision {
    match (class, state) {
        (RouteClass::Unguarded, _) => Decision::Render,
        (_, AuthState::Pending) => Decision::Loading,
        (RouteClass::Protected, AuthState::SignedIn(_)) | (RouteClass::Public, AuthState::SignedOut) => {
            Decision::Render
        }
        (RouteClass::Protected, AuthState::SignedOut) => Decision::Redirect(RedirectTarget::Login),
        (RouteClass::Public, AuthState::SignedIn(_)) => Decision::Redirect(RedirectTarget::Landing),
    }
}
