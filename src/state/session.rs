//! Persistent bearer-token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token is the only state that survives a reload. It lives under
//! a single `localStorage` key; only the operations in `state::auth` write it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Mechanical token storage. No validation happens here.
pub trait SessionStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Token stored in browser `localStorage`.
///
/// Outside the browser every read is empty and every write is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalStorageSession {
    key: &'static str,
}

impl Default for LocalStorageSession {
    fn default() -> Self {
        Self { key: TOKEN_KEY }
    }
}

/// Log a failed `localStorage` write (quota, private mode). Returns whether
/// the write went through.
#[cfg(any(test, feature = "csr"))]
fn storage_written<E: std::fmt::Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("failed to {action} session token: {e:?}");
            false
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalStorageSession {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(self.key)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session not persisted");
                return;
            };
            storage_written("persist", storage.set_item(self.key, token));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                storage_written("clear", storage.remove_item(self.key));
            }
        }
    }
}

/// In-memory token store for tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    token: Arc<Mutex<Option<String>>>,
}

impl MemorySession {
    pub fn with_token(token: &str) -> Self {
        let session = Self::default();
        session.set(token);
        session
    }
}

impl SessionStore for MemorySession {
    fn get(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}
