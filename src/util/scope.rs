//! Ownership-scoped async requests.
//!
//! A view opens a [`ViewScope`] when it mounts and the scope closes on
//! cleanup. Work started through [`spawn_scoped`] still runs to completion,
//! but its result is only applied while the scope is alive, so a response
//! for a page the user already left never writes into disposed signals.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct ViewScope {
    alive: Arc<AtomicBool>,
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewScope {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn close(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// Scope tied to the current reactive owner; closed by `on_cleanup`.
pub fn use_view_scope() -> ViewScope {
    let scope = ViewScope::new();
    let on_drop = scope.clone();
    leptos::prelude::on_cleanup(move || on_drop.close());
    scope
}

/// Await `task`, then hand its output to `apply` if the scope is still open.
/// Returns whether `apply` ran.
pub async fn run_scoped<Fut, T, F>(scope: ViewScope, task: Fut, apply: F) -> bool
where
    Fut: Future<Output = T>,
    F: FnOnce(T),
{
    let output = task.await;
    if scope.is_alive() {
        apply(output);
        true
    } else {
        log::debug!("view closed before its request finished; result dropped");
        false
    }
}

/// Spawn [`run_scoped`] on the browser event loop. Off-browser this is a no-op.
pub fn spawn_scoped<Fut, T, F>(scope: &ViewScope, task: Fut, apply: F)
where
    Fut: Future<Output = T> + 'static,
    T: 'static,
    F: FnOnce(T) + 'static,
{
    #[cfg(feature = "csr")]
    {
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            run_scoped(scope, task, apply).await;
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (scope, task, apply);
    }
}
