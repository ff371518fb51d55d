//! Build-time client configuration.
//!
//! The WASM bundle has no process environment, so the API base URL is baked
//! in from `TASTE_API_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Base URL of the remote Taste API, without a trailing slash.
#[must_use]
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("TASTE_API_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}
