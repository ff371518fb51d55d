//! Wire DTOs for the authentication API and the persisted identity record.
//!
//! DESIGN
//! ======
//! The API speaks camelCase JSON; every type here renames accordingly so
//! serde round-trips stay lossless. `Identity` doubles as the durable-storage
//! record and must never carry the access token.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Sign-in request body for `POST /auth/signin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Username or email address.
    pub identifier: String,
    pub password: String,
}

/// Successful sign-in payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninResponse {
    /// Numeric user identifier assigned by the API.
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Bearer token. The API omits it when sign-in did not complete.
    #[serde(default)]
    pub access_token: Option<String>,
}

impl SigninResponse {
    /// The identity fields of this response, without the credential.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity { id: self.id, username: self.username.clone(), email: self.email.clone() }
    }
}

/// The signed-in user's identity as persisted in durable storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Registration body for `POST /auth/signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// `{ "message": ... }` body used for signup confirmations and API errors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
