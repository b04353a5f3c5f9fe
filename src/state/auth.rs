//! Identity resolution and the session lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `resolve` turns the stored token into an [`Identity`] once per load (and
//! again right after a login). `login`, `logout`, and `expire` are the only
//! writers of the session store. The route guard reads the resulting
//! [`AuthState`]; it never talks to the session directly.
//!
//! INVARIANT
//! =========
//! `identity.authenticated` implies a token is stored and the last profile
//! lookup with it succeeded. Every path that invalidates the token also resets
//! the identity.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::SessionStore;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::Role;

/// Resolved authentication/authorization state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    pub authenticated: bool,
    pub role: Option<Role>,
}

impl Identity {
    pub const fn logged_out() -> Self {
        Self { authenticated: false, role: None }
    }

    pub const fn logged_in(role: Option<Role>) -> Self {
        Self { authenticated: true, role }
    }
}

/// Whether the identity lookup for this load has finished.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Unresolved,
    Resolved,
}

/// Authentication state held at the application root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub identity: Identity,
}

impl AuthState {
    pub fn is_loading(&self) -> bool {
        self.phase == AuthPhase::Unresolved
    }

    /// Record a finished lookup.
    pub fn settle(&mut self, identity: Identity) {
        self.phase = AuthPhase::Resolved;
        self.identity = identity;
    }

    /// Mark a new lookup as in flight (after login).
    pub fn begin(&mut self) {
        self.phase = AuthPhase::Unresolved;
    }
}

/// Exchange the stored token for an identity.
///
/// No token: logged out, no request. Lookup failure of any kind: the token
/// is cleared and the result is logged out.
pub async fn resolve<S, T>(session: &S, api: &ApiClient<T>) -> Identity
where
    S: SessionStore,
    T: Transport,
{
    let Some(token) = session.get() else {
        return Identity::logged_out();
    };
    match api.current_user(&token).await {
        Ok(user) => {
            let role = Role::parse(&user.role);
            if role.is_none() {
                log::warn!("unrecognised role {:?}; treating as no role", user.role);
            }
            log::info!("session resolved with role {}", role.map_or("none", Role::as_str));
            Identity::logged_in(role)
        }
        Err(e) => {
            // A login or logout may have replaced the token while the lookup ran.
            if session.get().as_deref() == Some(token.as_str()) {
                log::info!("stored session rejected ({e}); clearing");
                session.clear();
            }
            Identity::logged_out()
        }
    }
}

/// Apply a finished [`resolve`] only if the session still matches it.
///
/// `token_used` is the token stored when the lookup started. An authenticated
/// result needs that same token still stored; a logged-out result needs the
/// store to be empty. Anything else means the session was replaced or
/// dropped in between, so the result is stale. Returns whether it applied.
pub fn settle_if_current<S: SessionStore>(
    session: &S,
    state: &mut AuthState,
    token_used: Option<&str>,
    identity: Identity,
) -> bool {
    let expected = if identity.authenticated { token_used } else { None };
    if session.get().as_deref() != expected {
        log::debug!("session changed during identity lookup; result dropped");
        return false;
    }
    state.settle(identity);
    true
}

/// Trade credentials for a token and store it.
///
/// The identity is not touched; the caller re-runs [`resolve`] so the new
/// token is validated before anything is unlocked.
///
/// # Errors
///
/// Returns the backend's rejection unchanged; nothing is stored on failure.
pub async fn login<S, T>(session: &S, api: &ApiClient<T>, username: &str, password: &str) -> Result<(), ApiError>
where
    S: SessionStore,
    T: Transport,
{
    let token = api.issue_token(username, password).await?;
    session.set(&token);
    log::info!("login succeeded for {username}");
    Ok(())
}

/// Drop the session locally. No server call; idempotent.
pub fn logout<S: SessionStore>(session: &S, state: &mut AuthState) {
    session.clear();
    state.settle(Identity::logged_out());
}

/// React to a failed call. An `Unauthorized` response means the token is no
/// longer valid, so the session is dropped. Returns whether that happened.
pub fn expire_on_unauthorized<S: SessionStore>(session: &S, state: &mut AuthState, error: &ApiError) -> bool {
    if !error.is_unauthorized() {
        return false;
    }
    log::info!("request unauthorized; ending session");
    logout(session, state);
    true
}
