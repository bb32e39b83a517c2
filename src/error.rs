//! Error types for the QCS SDK.
//!
//! This module provides a unified error type for all SDK operations,
//! separating server-reported rejections from transport-level failures.

use thiserror::Error;

/// Result type for QCS operations.
pub type Result<T> = std::result::Result<T, QcsError>;

/// Errors that can occur when using the QCS SDK.
#[derive(Error, Debug)]
pub enum QcsError {
    /// The server answered with a non-200 status and an error message.
    ///
    /// `Display` renders `QCS::Error:{message}`, matching the error
    /// string emitted by every QCS SDK. The HTTP status code is carried
    /// alongside for callers that want to classify failures.
    #[error("QCS::Error:{message}")]
    ServerRejected {
        /// HTTP status code of the response.
        status: u16,
        /// Error message reported by the server.
        message: String,
    },

    /// HTTP request error (connection refused, DNS failure, ...).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body that did not decode against the expected shape.
    #[error("malformed response (status {status}): {source}")]
    MalformedResponse {
        /// HTTP status code of the response.
        status: u16,
        /// The underlying decode failure.
        source: serde_json::Error,
    },
}

impl QcsError {
    /// Returns the HTTP status code if the server produced a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            QcsError::ServerRejected { status, .. } => Some(*status),
            QcsError::MalformedResponse { status, .. } => Some(*status),
            QcsError::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Returns true if retrying the call might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            QcsError::ServerRejected { status, .. } => *status >= 500 || *status == 429,
            QcsError::Transport(_) => true,
            QcsError::MalformedResponse { .. } => false,
        }
    }
}
