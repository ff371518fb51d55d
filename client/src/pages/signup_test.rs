use super::*;

fn filled() -> SignupForm {
    SignupForm {
        username: " alice ".to_owned(),
        email: " a@x.com ".to_owned(),
        password: "hunter22".to_owned(),
        confirm_password: "hunter22".to_owned(),
        first_name: String::new(),
        last_name: "  ".to_owned(),
    }
}

#[test]
fn validate_signup_input_builds_trimmed_request() {
    let req = validate_signup_input(&filled()).unwrap();
    assert_eq!(req.username, "alice");
    assert_eq!(req.email, "a@x.com");
    assert_eq!(req.password, "hunter22");
    assert_eq!(req.first_name, None);
    assert_eq!(req.last_name, None);
}

#[test]
fn validate_signup_input_keeps_optional_names() {
    let form = SignupForm { first_name: " Alice ".to_owned(), last_name: "Liddell".to_owned(), ..filled() };
    let req = validate_signup_input(&form).unwrap();
    assert_eq!(req.first_name.as_deref(), Some("Alice"));
    assert_eq!(req.last_name.as_deref(), Some("Liddell"));
}

#[test]
fn validate_signup_input_requires_core_fields() {
    for form in [
        SignupForm { username: "  ".to_owned(), ..filled() },
        SignupForm { email: String::new(), ..filled() },
        SignupForm { password: String::new(), confirm_password: String::new(), ..filled() },
    ] {
        assert_eq!(validate_signup_input(&form), Err("Username, email and password are required."));
    }
}

#[test]
fn validate_signup_input_rejects_mismatched_passwords() {
    let form = SignupForm { confirm_password: "hunter23".to_owned(), ..filled() };
    assert_eq!(validate_signup_input(&form), Err("Passwords do not match."));
}

#[test]
fn validate_signup_input_rejects_bad_email() {
    for email in ["alice", "@x.com", "a@", "a@b@c"] {
        let form = SignupForm { email: email.to_owned(), ..filled() };
        assert_eq!(validate_signup_input(&form), Err("Enter a valid email address."), "{email}");
    }
}

#[test]
fn validate_signup_input_enforces_length_limits() {
    let form = SignupForm { username: "u".repeat(USERNAME_MAX + 1), ..filled() };
    assert_eq!(validate_signup_input(&form), Err("Username must be at most 50 characters."));

    let form = SignupForm { username: "u".repeat(USERNAME_MAX), ..filled() };
    assert!(validate_signup_input(&form).is_ok());

    let form = SignupForm { email: format!("{}@x.com", "e".repeat(EMAIL_MAX)), ..filled() };
    assert_eq!(validate_signup_input(&form), Err("Enter a valid email address."));

    let long = "p".repeat(PASSWORD_MAX + 1);
    let form = SignupForm { password: long.clone(), confirm_password: long, ..filled() };
    assert_eq!(validate_signup_input(&form), Err("Password must be at most 120 characters."));

    let form = SignupForm { first_name: "n".repeat(NAME_MAX + 1), ..filled() };
    assert_eq!(validate_signup_input(&form), Err("Names must be at most 100 characters."));
}
