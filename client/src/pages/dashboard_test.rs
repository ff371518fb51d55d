use super::*;

#[test]
fn greeting_uses_username() {
    let identity = Identity { id: 7, username: "alice".to_owned(), email: "a@x.com".to_owned() };
    assert_eq!(greeting(Some(&identity)), "Welcome back, alice!");
}

#[test]
fn greeting_falls_back_without_name() {
    let blank = Identity { id: 7, username: "  ".to_owned(), email: "a@x.com".to_owned() };
    assert_eq!(greeting(Some(&blank)), "Welcome back!");
    assert_eq!(greeting(None), "Welcome back!");
}
