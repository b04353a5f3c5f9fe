//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Nothing is retried. Views turn an `ApiError` into a toast via
//! [`ApiError::user_message`]; `Unauthorized` additionally expires the session.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Message shown when the server gives no usable `detail`.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network failure: {0}")]
    Network(String),
    /// HTTP 401: missing, invalid, or expired bearer token.
    #[error("unauthorized")]
    Unauthorized { detail: Option<String> },
    /// Any other 4xx.
    #[error("request rejected ({status})")]
    Validation { status: u16, detail: Option<String> },
    /// 5xx, or a non-2xx status outside the 4xx range.
    #[error("server failure ({status})")]
    Server { status: u16, detail: Option<String> },
    /// A 2xx body that did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = extract_detail(body);
        match status {
            401 => Self::Unauthorized { detail },
            400..=499 => Self::Validation { status, detail },
            _ => Self::Server { status, detail },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Server-provided message, when one was sent.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail } | Self::Validation { detail, .. } | Self::Server { detail, .. } => {
                detail.as_deref()
            }
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Text for a user-facing notification.
    pub fn user_message(&self) -> String {
        self.detail().unwrap_or(GENERIC_ERROR_MESSAGE).to_owned()
    }
}

/// Pull `detail` out of a FastAPI-style error body.
///
/// Accepts `{"detail": "..."}` and the validation form
/// `{"detail": [{"msg": "..."}, ...]}` (messages joined with `"; "`).
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(text) => Some(text.trim().to_owned()).filter(|t| !t.is_empty()),
        Value::Array(items) => {
            let joined = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("; ");
            Some(joined).filter(|t| !t.is_empty())
        }
        _ => None,
    }
}
