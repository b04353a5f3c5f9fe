//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root builds one [`AuthContext`] and provides it to every view. Views
//! get a read-only view of the auth state plus callbacks into the root; they
//! never hold a writable handle to the identity.

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::auth::{AuthState, Identity};
use crate::state::session::{LocalStorageSession, SessionStore};

#[derive(Clone, Copy)]
pub struct AuthContext {
    state: Signal<AuthState>,
    session: LocalStorageSession,
    refresh: Callback<()>,
    logout: Callback<()>,
    expire: Callback<ApiError>,
}

impl AuthContext {
    pub fn new(
        state: Signal<AuthState>,
        session: LocalStorageSession,
        refresh: Callback<()>,
        logout: Callback<()>,
        expire: Callback<ApiError>,
    ) -> Self {
        Self { state, session, refresh, logout, expire }
    }

    /// Tracked read of the full auth state.
    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    /// Tracked read of the identity.
    pub fn identity(&self) -> Identity {
        self.state.get().identity
    }

    /// Current bearer token, read fresh from storage on every call.
    pub fn token(&self) -> Option<String> {
        self.session.get()
    }

    pub fn session(&self) -> LocalStorageSession {
        self.session
    }

    /// Re-run identity resolution (after a login stored a new token).
    pub fn refresh(&self) {
        self.refresh.run(());
    }

    pub fn logout(&self) {
        self.logout.run(());
    }

    /// Log out when `error` says the token is no longer accepted.
    pub fn expire_if_unauthorized(&self, error: &ApiError) {
        if error.is_unauthorized() {
            self.expire.run(error.clone());
        }
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
