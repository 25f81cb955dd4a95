//! Router error types
//!
//! Only history sinks produce these; pushing to the navigation log itself
//! never fails.

use thiserror::Error;

/// Errors raised while applying a navigation to a history backend
#[derive(Error, Debug)]
pub enum RouterError {
    /// No history backend is reachable (no window, no History object)
    #[error("History unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected the pushed state
    #[error("pushState failed: {0}")]
    PushState(String),

    /// History state could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RouterError {
    fn from(err: serde_json::Error) -> Self {
        RouterError::Serialization(err.to_string())
    }
}

/// Result type alias for router operations
pub type RouterResult<T> = Result<T, RouterError>;
