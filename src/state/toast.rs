//! Transient notification queue.
//!
//! Pages push toasts; `components::toast_stack` renders them and dismisses
//! each after its `duration_ms`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::net::error::ApiError;

pub const SUCCESS_DURATION_MS: u32 = 3_000;
pub const ERROR_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
    pub duration_ms: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, title: &str, description: Option<String>) -> u64 {
        self.next_id += 1;
        let duration_ms = match kind {
            ToastKind::Success => SUCCESS_DURATION_MS,
            ToastKind::Error => ERROR_DURATION_MS,
        };
        self.items.push(Toast { id: self.next_id, kind, title: title.to_owned(), description, duration_ms });
        self.next_id
    }

    pub fn success(&mut self, title: &str, description: Option<String>) -> u64 {
        self.push(ToastKind::Success, title, description)
    }

    /// Error toast carrying the server message, or the generic fallback.
    pub fn error(&mut self, title: &str, error: &ApiError) -> u64 {
        self.push(ToastKind::Error, title, Some(error.user_message()))
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
