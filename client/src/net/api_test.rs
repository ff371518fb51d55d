use super::*;

#[test]
fn endpoint_joins_without_double_slash() {
    assert_eq!(endpoint("http://localhost:8080/api", SIGNIN_PATH), "http://localhost:8080/api/auth/signin");
    assert_eq!(endpoint("http://localhost:8080/api/", "auth/signup"), "http://localhost:8080/api/auth/signup");
}

#[test]
fn http_api_builds_urls_from_base() {
    let api = HttpAuthApi::new("https://taste.test/api");
    assert_eq!(api.url(SIGNUP_PATH), "https://taste.test/api/auth/signup");
    assert_eq!(api.url(SIGNIN_PATH), "https://taste.test/api/auth/signin");
}

#[test]
fn from_config_uses_configured_base() {
    assert_eq!(HttpAuthApi::from_config(), HttpAuthApi::new(crate::config::api_base_url()));
}

#[test]
fn signup_confirmation_reads_message() {
    let msg = signup_confirmation(r#"{"message":"User registered successfully!"}"#);
    assert_eq!(msg.message, "User registered successfully!");
}

#[test]
fn signup_confirmation_defaults_for_empty_body() {
    assert_eq!(signup_confirmation("").message, DEFAULT_SIGNUP_MESSAGE);
    assert_eq!(signup_confirmation(r#"{"message":"  "}"#).message, DEFAULT_SIGNUP_MESSAGE);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn signin_outside_browser_is_request_failure() {
    let api = HttpAuthApi::new("http://localhost:8080/api");
    let creds = Credentials { identifier: "a@x.com".to_owned(), password: "pw".to_owned() };
    let err = futures::executor::block_on(api.signin(&creds)).unwrap_err();
    assert!(matches!(err, AuthError::RequestFailed { status: None, .. }));
}
