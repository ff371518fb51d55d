//! Session store: the single source of truth for the signed-in identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the remote authentication API and durable storage. Two keys are
//! kept: `token` holds the raw bearer credential and `user` holds the JSON
//! identity record. Nothing else reads or writes those keys.
//!
//! INVARIANTS
//! ==========
//! - A stored token implies a stored identity record: login writes the
//!   identity before the token and logout removes the token first.
//! - A failed login leaves storage exactly as it was.
//! - A `Session` is only produced when every field is present.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::AuthApi;
use crate::net::error::AuthError;
use crate::net::types::{Credentials, Identity, MessageResponse, SignupRequest};
use crate::util::storage::SessionStorage;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// An authenticated identity plus its access credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
    pub token: String,
}

#[derive(Clone, Debug)]
pub struct SessionStore<S, A> {
    storage: S,
    api: A,
}

impl<S: SessionStorage, A: AuthApi> SessionStore<S, A> {
    pub fn new(storage: S, api: A) -> Self {
        Self { storage, api }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Sign in and persist the resulting session.
    ///
    /// # Errors
    ///
    /// Propagates API failures unchanged. A success response without an
    /// access token is a [`AuthError::RequestFailed`]; a refused storage
    /// write is [`AuthError::Storage`]. Storage is untouched on every error.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let resp = self.api.signin(credentials).await?;
        let token = resp
            .access_token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::RequestFailed {
                status: None,
                message: "sign-in response did not include an access token".to_owned(),
            })?;
        let session = Session { identity: resp.identity(), token };
        self.persist(&session)?;
        leptos::logging::log!("signed in as {}", session.identity.username);
        Ok(session)
    }

    /// Register an account. Never alters the stored session.
    ///
    /// # Errors
    ///
    /// Propagates API failures unchanged.
    pub async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse, AuthError> {
        let confirmation = self.api.signup(request).await?;
        leptos::logging::log!("registered account {}", request.username);
        Ok(confirmation)
    }

    /// Remove the stored session. Safe to call when signed out.
    pub fn logout(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(USER_KEY);
    }

    /// The stored identity, or `None` when absent or unreadable.
    pub fn current_user(&self) -> Option<Identity> {
        match self.read_identity() {
            Ok(identity) => identity,
            Err(err) => {
                leptos::logging::warn!("{err}; treating as signed out");
                None
            }
        }
    }

    /// The raw stored credential.
    pub fn token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY)
    }

    /// Presence check only; the credential is not validated remotely.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }

    /// The complete session, or `None` if any part is missing.
    pub fn session(&self) -> Option<Session> {
        let token = self.token().filter(|t| !t.is_empty())?;
        let identity = self.current_user()?;
        Some(Session { identity, token })
    }

    /// `Authorization` header value for credentialed API calls.
    pub fn authorization_header(&self) -> Option<String> {
        self.token().filter(|t| !t.is_empty()).map(|t| format!("Bearer {t}"))
    }

    /// Reconcile a failed credentialed call. Returns `true` when the error
    /// showed the credential is no longer honoured and the session was cleared.
    pub fn handle_api_error(&self, err: &AuthError) -> bool {
        if *err != AuthError::Unauthorized {
            return false;
        }
        leptos::logging::warn!("stored credential rejected; clearing session");
        self.logout();
        true
    }

    fn read_identity(&self) -> Result<Option<Identity>, AuthError> {
        let Some(raw) = self.storage.get_item(USER_KEY) else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| AuthError::CorruptedSession(e.to_string()))
    }

    fn persist(&self, session: &Session) -> Result<(), AuthError> {
        let record = serde_json::to_string(&session.identity).map_err(|e| AuthError::Storage(e.to_string()))?;
        let previous_user = self.storage.get_item(USER_KEY);
        self.storage.set_item(USER_KEY, &record).map_err(AuthError::Storage)?;
        if let Err(e) = self.storage.set_item(TOKEN_KEY, &session.token) {
            match previous_user {
                Some(raw) => {
                    if let Err(rollback) = self.storage.set_item(USER_KEY, &raw) {
                        leptos::logging::warn!("could not restore previous identity record: {rollback}");
                    }
                }
                None => self.storage.remove_item(USER_KEY),
            }
            return Err(AuthError::Storage(e));
        }
        Ok(())
    }
}
