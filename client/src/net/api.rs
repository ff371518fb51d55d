//! REST client for the remote authentication API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: calls fail with a transport error
//! since the API is only reachable from the browser.
//!
//! DESIGN
//! ======
//! `AuthApi` is the seam the session store depends on, so tests substitute
//! an in-memory fake instead of a network.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::error::AuthError;
#[cfg(feature = "hydrate")]
use super::error::failure_from_response;
use super::types::{Credentials, MessageResponse, SigninResponse, SignupRequest};

pub const SIGNIN_PATH: &str = "/auth/signin";
pub const SIGNUP_PATH: &str = "/auth/signup";

#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_SIGNUP_MESSAGE: &str = "Registration successful";

/// Remote authentication operations.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for an identity and access token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RequestFailed`] on transport failure or a
    /// non-success response.
    async fn signin(&self, credentials: &Credentials) -> Result<SigninResponse, AuthError>;

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RequestFailed`] on transport failure, validation
    /// errors, or a duplicate account.
    async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse, AuthError>;
}

/// `AuthApi` over HTTP against a configured base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Client pointed at the build-time configured API.
    #[must_use]
    pub fn from_config() -> Self {
        Self::new(crate::config::api_base_url())
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn signin(&self, credentials: &Credentials) -> Result<SigninResponse, AuthError> {
        let url = self.url(SIGNIN_PATH);
        #[cfg(feature = "hydrate")]
        {
            let text = post_json(&url, credentials).await?;
            serde_json::from_str(&text)
                .map_err(|e| AuthError::RequestFailed { status: None, message: format!("unexpected sign-in response: {e}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, credentials);
            Err(AuthError::transport("not available on server"))
        }
    }

    async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse, AuthError> {
        let url = self.url(SIGNUP_PATH);
        #[cfg(feature = "hydrate")]
        {
            let text = post_json(&url, request).await?;
            Ok(signup_confirmation(&text))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, request);
            Err(AuthError::transport("not available on server"))
        }
    }
}

/// POST a JSON body without credentials and return the success body text.
#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(url: &str, body: &B) -> Result<String, AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(AuthError::transport)?
        .send()
        .await
        .map_err(AuthError::transport)?;
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    if !resp.ok() {
        return Err(failure_from_response(status, &text));
    }
    Ok(text)
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Interpret a successful signup body. Servers that answer with an empty or
/// non-`{message}` body still count as a confirmation.
#[cfg(any(test, feature = "hydrate"))]
fn signup_confirmation(body: &str) -> MessageResponse {
    serde_json::from_str::<MessageResponse>(body)
        .ok()
        .filter(|m| !m.message.trim().is_empty())
        .unwrap_or_else(|| MessageResponse { message: DEFAULT_SIGNUP_MESSAGE.to_owned() })
}
