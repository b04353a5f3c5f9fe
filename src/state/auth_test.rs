use std::cell::Cell;
use std::future::Future;
use std::pin::{Pin, pin};
use std::task::{Context, Poll};

use futures::executor::block_on;
use futures::task::noop_waker;

use super::*;
use crate::config::ClientConfig;
use crate::net::transport::{ApiRequest, ApiResponse};
use crate::state::session::MemorySession;
use crate::test_support::{FakeTransport, TEST_BASE_URL, client};

/// Returns `Pending` on its first poll only.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Scripted transport whose first request stalls for one poll, leaving room
/// to change the session while the lookup is in flight.
struct StallingTransport {
    inner: FakeTransport,
    stalled: Cell<bool>,
}

impl Transport for StallingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        if !self.stalled.replace(true) {
            YieldOnce(false).await;
        }
        self.inner.send(request).await
    }
}

fn stalling_client(inner: FakeTransport) -> ApiClient<StallingTransport> {
    let config = ClientConfig::from_values(Some(TEST_BASE_URL), None);
    ApiClient::new(&config, StallingTransport { inner, stalled: Cell::new(false) })
}

/// Start `resolve`, run `between` once it is suspended, then finish it.
fn resolve_around<T: Transport>(session: &MemorySession, api: &ApiClient<T>, between: impl FnOnce()) -> Identity {
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    let mut lookup = pin!(resolve(session, api));
    assert!(lookup.as_mut().poll(&mut cx).is_pending());
    between();
    match lookup.as_mut().poll(&mut cx) {
        Poll::Ready(identity) => identity,
        Poll::Pending => panic!("lookup still pending after second poll"),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_unresolved_and_logged_out() {
    let state = AuthState::default();
    assert!(state.is_loading());
    assert_eq!(state.identity, Identity::logged_out());
}

#[test]
fn settle_and_begin_move_between_phases() {
    let mut state = AuthState::default();
    state.settle(Identity::logged_in(Some(Role::Viewer)));
    assert!(!state.is_loading());
    state.begin();
    assert!(state.is_loading());
    assert_eq!(state.identity, Identity::logged_in(Some(Role::Viewer)));
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_without_token_skips_network() {
    let session = MemorySession::default();
    let api = client(FakeTransport::default());
    let identity = block_on(resolve(&session, &api));
    assert_eq!(identity, Identity::logged_out());
    assert!(api.transport().requests().is_empty());
}

#[test]
fn resolve_admin_token_logs_in() {
    let session = MemorySession::with_token("abc");
    let api = client(FakeTransport::default().reply(200, r#"{"role":"Admin"}"#));
    let identity = block_on(resolve(&session, &api));
    assert_eq!(identity, Identity { authenticated: true, role: Some(Role::Admin) });
    assert_eq!(session.get().as_deref(), Some("abc"));
    assert_eq!(api.transport().requests()[0].bearer.as_deref(), Some("abc"));
}

#[test]
fn resolve_expired_token_clears_session() {
    let session = MemorySession::with_token("expired");
    let api = client(FakeTransport::default().reply(401, r#"{"detail":"Could not validate credentials"}"#));
    let identity = block_on(resolve(&session, &api));
    assert_eq!(identity, Identity { authenticated: false, role: None });
    assert_eq!(session.get(), None);
}

#[test]
fn resolve_clears_session_on_any_failure() {
    let failures = [
        FakeTransport::default().fail("offline"),
        FakeTransport::default().reply(500, ""),
        FakeTransport::default().reply(403, r#"{"detail":"nope"}"#),
        FakeTransport::default().reply(200, "not json"),
    ];
    for transport in failures {
        let session = MemorySession::with_token("abc");
        let api = client(transport);
        assert_eq!(block_on(resolve(&session, &api)), Identity::logged_out());
        assert_eq!(session.get(), None);
    }
}

#[test]
fn resolve_unknown_role_is_authenticated_without_role() {
    let session = MemorySession::with_token("abc");
    let api = client(FakeTransport::default().reply(200, r#"{"role":"Owner"}"#));
    assert_eq!(block_on(resolve(&session, &api)), Identity::logged_in(None));
}

// =============================================================
// login / logout / expire
// =============================================================

#[test]
fn login_stores_token_then_resolve_picks_up_role() {
    let session = MemorySession::default();
    let api = client(
        FakeTransport::default()
            .reply(200, r#"{"access_token":"fresh"}"#)
            .reply(200, r#"{"role":"Creator"}"#),
    );
    block_on(login(&session, &api, "ada", "pw")).unwrap();
    assert_eq!(session.get().as_deref(), Some("fresh"));
    assert_eq!(block_on(resolve(&session, &api)), Identity::logged_in(Some(Role::Creator)));
}

#[test]
fn login_failure_leaves_session_empty() {
    let session = MemorySession::default();
    let api = client(FakeTransport::default().reply(401, r#"{"detail":"Incorrect username or password"}"#));
    let err = block_on(login(&session, &api, "ada", "bad")).unwrap_err();
    assert_eq!(err.user_message(), "Incorrect username or password");
    assert_eq!(session.get(), None);
}

#[test]
fn logout_clears_session_and_identity() {
    let session = MemorySession::with_token("abc");
    let mut state = AuthState::default();
    state.settle(Identity::logged_in(Some(Role::Admin)));
    logout(&session, &mut state);
    assert_eq!(session.get(), None);
    assert_eq!(state.identity, Identity::logged_out());
    assert!(!state.is_loading());
}

#[test]
fn logout_is_idempotent() {
    let session = MemorySession::default();
    let mut state = AuthState::default();
    logout(&session, &mut state);
    let once = state;
    logout(&session, &mut state);
    assert_eq!(state, once);
    assert_eq!(state.identity, Identity::logged_out());
}

#[test]
fn expire_only_reacts_to_unauthorized() {
    let session = MemorySession::with_token("abc");
    let mut state = AuthState::default();
    state.settle(Identity::logged_in(Some(Role::Creator)));

    let server = ApiError::Server { status: 500, detail: None };
    assert!(!expire_on_unauthorized(&session, &mut state, &server));
    assert!(state.identity.authenticated);
    assert!(session.get().is_some());

    let unauthorized = ApiError::Unauthorized { detail: None };
    assert!(expire_on_unauthorized(&session, &mut state, &unauthorized));
    assert_eq!(state.identity, Identity::logged_out());
    assert_eq!(session.get(), None);
}

// =============================================================
// settle_if_current
// =============================================================

#[test]
fn settle_if_current_applies_matching_result() {
    let session = MemorySession::with_token("abc");
    let api = client(FakeTransport::default().reply(200, r#"{"role":"Admin"}"#));
    let mut state = AuthState::default();
    let token_used = session.get();
    let identity = block_on(resolve(&session, &api));
    assert!(settle_if_current(&session, &mut state, token_used.as_deref(), identity));
    assert_eq!(state.identity, Identity::logged_in(Some(Role::Admin)));
    assert!(!state.is_loading());
}

#[test]
fn settle_if_current_applies_rejected_lookup() {
    let session = MemorySession::with_token("expired");
    let api = client(FakeTransport::default().reply(401, ""));
    let mut state = AuthState::default();
    let token_used = session.get();
    let identity = block_on(resolve(&session, &api));
    assert!(settle_if_current(&session, &mut state, token_used.as_deref(), identity));
    assert_eq!(state.identity, Identity::logged_out());
    assert!(!state.is_loading());
}

#[test]
fn logout_during_lookup_wins_over_late_success() {
    let session = MemorySession::with_token("abc");
    let api = stalling_client(FakeTransport::default().reply(200, r#"{"role":"Admin"}"#));
    let mut state = AuthState::default();
    state.settle(Identity::logged_in(Some(Role::Admin)));
    let token_used = session.get();
    state.begin();

    let identity = resolve_around(&session, &api, || logout(&session, &mut state));
    assert_eq!(identity, Identity::logged_in(Some(Role::Admin)));

    assert!(!settle_if_current(&session, &mut state, token_used.as_deref(), identity));
    assert_eq!(session.get(), None);
    assert_eq!(state.identity, Identity::logged_out());
}

#[test]
fn expiry_during_lookup_wins_over_late_success() {
    let session = MemorySession::with_token("abc");
    let api = stalling_client(FakeTransport::default().reply(200, r#"{"role":"Creator"}"#));
    let mut state = AuthState::default();
    let token_used = session.get();

    let unauthorized = ApiError::Unauthorized { detail: None };
    let identity = resolve_around(&session, &api, || {
        expire_on_unauthorized(&session, &mut state, &unauthorized);
    });

    assert!(!settle_if_current(&session, &mut state, token_used.as_deref(), identity));
    assert!(!state.identity.authenticated);
    assert_eq!(session.get(), None);
}

#[test]
fn stale_rejection_keeps_newer_token() {
    let session = MemorySession::with_token("old");
    let api = stalling_client(FakeTransport::default().reply(401, ""));
    let mut state = AuthState::default();
    let token_used = session.get();

    let identity = resolve_around(&session, &api, || session.set("fresh"));
    assert_eq!(identity, Identity::logged_out());
    assert_eq!(session.get().as_deref(), Some("fresh"));

    assert!(!settle_if_current(&session, &mut state, token_used.as_deref(), identity));
    assert!(state.is_loading());
}
