use super::*;
use crate::net::types::Identity;

#[test]
fn home_actions_empty_while_pending() {
    assert!(home_actions(&AuthState::Pending).is_empty());
}

#[test]
fn home_actions_point_signed_out_users_at_entry_views() {
    let paths: Vec<&str> = home_actions(&AuthState::SignedOut).iter().map(|(_, p)| *p).collect();
    assert_eq!(paths, vec!["/signup", "/login"]);
}

#[test]
fn home_actions_point_signed_in_users_at_dashboard() {
    let state = AuthState::SignedIn(Identity { id: 1, username: "a".to_owned(), email: "a@x.com".to_owned() });
    assert_eq!(home_actions(&state), &[("Go to Dashboard", "/dashboard")]);
}
