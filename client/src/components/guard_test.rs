use futures::executor::block_on;

use super::*;
use crate::state::auth::AuthContext;
use crate::state::session::SessionStore;
use crate::state::test_helpers::{FakeApi, MemoryStorage, alice_credentials, alice_response};
use crate::util::auth::RedirectTarget;

fn context() -> AuthContext<MemoryStorage, FakeApi> {
    AuthContext::new(SessionStore::new(MemoryStorage::new(), FakeApi::accepting(alice_response())))
}

#[test]
fn protected_decision_follows_session_without_remount() {
    Owner::new().with(|| {
        let ctx = context();
        let decision = guard_decision(ctx.state(), RouteClass::Protected);
        assert_eq!(decision.get_untracked(), Decision::Loading);

        ctx.resolve();
        assert_eq!(decision.get_untracked(), Decision::Redirect(RedirectTarget::Login));

        block_on(ctx.login(&alice_credentials())).unwrap();
        assert_eq!(decision.get_untracked(), Decision::Render);

        ctx.logout();
        assert_eq!(decision.get_untracked(), Decision::Redirect(RedirectTarget::Login));
    });
}

#[test]
fn public_decision_follows_session_without_remount() {
    Owner::new().with(|| {
        let ctx = context();
        let decision = guard_decision(ctx.state(), RouteClass::Public);
        assert_eq!(decision.get_untracked(), Decision::Loading);

        ctx.resolve();
        assert_eq!(decision.get_untracked(), Decision::Render);

        block_on(ctx.login(&alice_credentials())).unwrap();
        assert_eq!(decision.get_untracked(), Decision::Redirect(RedirectTarget::Landing));

        ctx.logout();
        assert_eq!(decision.get_untracked(), Decision::Render);
    });
}

#[test]
fn pending_decision_never_redirects() {
    Owner::new().with(|| {
        let ctx = context();
        block_on(ctx.store().login(&alice_credentials())).unwrap();
        for class in [RouteClass::Protected, RouteClass::Public] {
            assert_eq!(guard_decision(ctx.state(), class).get_untracked(), Decision::Loading, "{class:?}");
        }
    });
}
