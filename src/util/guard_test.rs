use super::*;
use crate::state::auth::AuthPhase;

const GUARDED: [AppRoute; 3] = [AppRoute::Admin, AppRoute::TestList, AppRoute::CreateTest];
const PUBLIC: [AppRoute; 4] = [AppRoute::Home, AppRoute::Login, AppRoute::Register, AppRoute::TestDetail];

fn resolved(identity: Identity) -> AuthState {
    AuthState { phase: AuthPhase::Resolved, identity }
}

#[test]
fn public_routes_open_to_everyone() {
    let identities = [
        Identity::logged_out(),
        Identity::logged_in(None),
        Identity::logged_in(Some(Role::Viewer)),
        Identity::logged_in(Some(Role::Admin)),
    ];
    for identity in identities {
        for route in PUBLIC {
            assert!(can_access(route, &identity), "{route:?} should be public");
        }
    }
}

#[test]
fn guarded_routes_need_admin_or_creator() {
    for route in GUARDED {
        assert!(can_access(route, &Identity::logged_in(Some(Role::Admin))));
        assert!(can_access(route, &Identity::logged_in(Some(Role::Creator))));
        assert!(!can_access(route, &Identity::logged_in(Some(Role::Viewer))));
        assert!(!can_access(route, &Identity::logged_in(None)));
        assert!(!can_access(route, &Identity::logged_out()));
    }
}

#[test]
fn guarded_routes_need_authentication_even_with_role() {
    let stale = Identity { authenticated: false, role: Some(Role::Admin) };
    assert!(!can_access(AppRoute::Admin, &stale));
}

#[test]
fn can_access_is_deterministic() {
    let identity = Identity::logged_in(Some(Role::Creator));
    for route in AppRoute::ALL {
        assert_eq!(can_access(route, &identity), can_access(route, &identity));
    }
}

#[test]
fn guard_decision_waits_while_unresolved() {
    let state = AuthState::default();
    assert_eq!(guard_decision(AppRoute::Admin, &state), GuardDecision::Pending);
    assert_eq!(guard_decision(AppRoute::Home, &state), GuardDecision::Allow);
}

#[test]
fn guard_decision_redirects_denied_routes() {
    let viewer = resolved(Identity::logged_in(Some(Role::Viewer)));
    assert_eq!(guard_decision(AppRoute::CreateTest, &viewer), GuardDecision::Redirect);
    let admin = resolved(Identity::logged_in(Some(Role::Admin)));
    assert_eq!(guard_decision(AppRoute::CreateTest, &admin), GuardDecision::Allow);
}

#[test]
fn nav_links_follow_identity() {
    assert_eq!(
        visible_nav_links(&Identity::logged_out()),
        vec![AppRoute::Home, AppRoute::Register, AppRoute::Login]
    );
    assert_eq!(visible_nav_links(&Identity::logged_in(Some(Role::Viewer))), vec![AppRoute::Home]);
    assert_eq!(
        visible_nav_links(&Identity::logged_in(Some(Role::Creator))),
        vec![AppRoute::Home, AppRoute::Admin, AppRoute::TestList, AppRoute::CreateTest]
    );
}

#[test]
fn paths_are_unique() {
    let mut paths = AppRoute::ALL.iter().map(|r| r.path()).collect::<Vec<_>>();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), AppRoute::ALL.len());
    assert_eq!(test_detail_href("t1"), "/test/t1");
}
