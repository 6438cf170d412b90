//! Error types shared by the action flows and the SSR host.
//!
//! ERROR HANDLING
//! ==============
//! Action errors never escape a widget: flows turn them into an error toast
//! and a log line, and the widget returns to its resting state.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of an external action call (delete, sign-out, list fetch).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status and no usable body.
    #[error("unexpected response status {status}")]
    Status { status: u16 },

    /// The response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The call was made outside the browser (SSR or tests).
    #[error("not available on server")]
    Unavailable,
}

/// Failure while assembling the SSR host configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("leptos configuration: {0}")]
    Leptos(String),
}
