//! Error type shared by the authentication API and the session store.
//!
//! ERROR HANDLING
//! ==============
//! Sign-in and signup failures propagate to the calling form for inline
//! display. A corrupted identity record is recovered locally as "no session".
//! `Unauthorized` is reserved for credentialed calls (those sending
//! `SessionStore::authorization_header`) and is reconciled by clearing the
//! session through `handle_api_error`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::MessageResponse;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Network or API failure during sign-in or signup. `status` is `None`
    /// when no HTTP response was received.
    #[error("{message}")]
    RequestFailed { status: Option<u16>, message: String },

    /// The stored identity record could not be parsed.
    #[error("stored session is corrupted: {0}")]
    CorruptedSession(String),

    /// The API rejected the stored credential.
    #[error("session expired, please sign in again")]
    Unauthorized,

    /// Durable storage refused a write.
    #[error("could not persist session: {0}")]
    Storage(String),
}

impl AuthError {
    /// A transport-level failure with no HTTP status.
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::RequestFailed { status: None, message: err.to_string() }
    }

}

/// Build the error for a non-success response to an uncredentialed call.
///
/// The message prefers the API's `{message}` body, then the raw body text,
/// then the status code. A 401 here is a rejected sign-in, not a revoked
/// session, so it stays `RequestFailed`.
#[must_use]
pub fn failure_from_response(status: u16, body: &str) -> AuthError {
    let message = serde_json::from_str::<MessageResponse>(body)
        .map(|m| m.message)
        .ok()
        .filter(|m| !m.trim().is_empty())
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty() && !trimmed.starts_with('{')).then(|| trimmed.to_owned())
        })
        .unwrap_or_else(|| format!("request failed: {status}"));
    AuthError::RequestFailed { status: Some(status), message }
}
