//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. `AuthContext` is provided once at the app
//! root; every read of session data goes through its store.
//!
//! DESIGN
//! ======
//! Loading is a state of its own rather than a flag beside the user, so no
//! consumer can observe "not loading and no user" before the store has been
//! read. Each transition replaces the whole value.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::{AuthApi, HttpAuthApi};
use crate::net::error::AuthError;
use crate::net::types::{Credentials, Identity, MessageResponse, SignupRequest};
use crate::state::session::{SessionStore, TOKEN_KEY, USER_KEY};
use crate::util::storage::{BrowserStorage, SessionStorage};

/// Whether a user is signed in, as far as the client knows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Durable storage has not been read yet (SSR and first hydrate pass).
    #[default]
    Pending,
    SignedIn(Identity),
    SignedOut,
}

impl AuthState {
    #[must_use]
    pub fn from_identity(identity: Option<Identity>) -> Self {
        identity.map_or(Self::SignedOut, Self::SignedIn)
    }

    #[must_use]
    pub fn user(&self) -> Option<&Identity> {
        match self {
            Self::SignedIn(identity) => Some(identity),
            Self::Pending | Self::SignedOut => None,
        }
    }
}

/// The reactive auth state paired with the store that owns the session.
#[derive(Clone, Debug)]
pub struct AuthContext<S = BrowserStorage, A = HttpAuthApi> {
    state: RwSignal<AuthState>,
    store: SessionStore<S, A>,
}

/// Context type provided by the application root.
pub type AppAuth = AuthContext<BrowserStorage, HttpAuthApi>;

impl AppAuth {
    /// Browser storage plus the configured HTTP API.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(SessionStore::new(BrowserStorage, HttpAuthApi::from_config()))
    }
}

impl<S, A> AuthContext<S, A>
where
    S: SessionStorage + Send + Sync + 'static,
    A: AuthApi + Send + Sync + 'static,
{
    /// Starts in [`AuthState::Pending`] until [`Self::resolve`] runs.
    pub fn new(store: SessionStore<S, A>) -> Self {
        Self { state: RwSignal::new(AuthState::Pending), store }
    }

    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    pub fn store(&self) -> &SessionStore<S, A> {
        &self.store
    }

    /// Initial load from durable storage. Leftovers of an incomplete session
    /// (token without identity, unreadable record) are erased so the store
    /// and the reactive state agree.
    pub fn resolve(&self) {
        let session = self.store.session();
        if session.is_none() && self.has_stored_fragments() {
            leptos::logging::warn!("discarding incomplete stored session");
            self.store.logout();
        }
        self.state.set(AuthState::from_identity(session.map(|s| s.identity)));
    }

    /// # Errors
    ///
    /// Propagates [`SessionStore::login`] failures; the state is unchanged.
    pub async fn login(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        let session = self.store.login(credentials).await?;
        self.state.set(AuthState::SignedIn(session.identity.clone()));
        Ok(session.identity)
    }

    /// # Errors
    ///
    /// Propagates [`SessionStore::signup`] failures.
    pub async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse, AuthError> {
        self.store.signup(request).await
    }

    pub fn logout(&self) {
        self.store.logout();
        self.state.set(AuthState::SignedOut);
        leptos::logging::log!("signed out");
    }

    /// Forward a failed credentialed call; signs out on `Unauthorized`.
    pub fn handle_api_error(&self, err: &AuthError) -> bool {
        let cleared = self.store.handle_api_error(err);
        if cleared {
            self.state.set(AuthState::SignedOut);
        }
        cleared
    }

    fn has_stored_fragments(&self) -> bool {
        let storage = self.store.storage();
        storage.get_item(TOKEN_KEY).is_some() || storage.get_item(USER_KEY).is_some()
    }
}
