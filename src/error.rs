//! Unified client error type.
//!
//! Every failure surfaces as a [`CloudError`]: configuration problems at
//! construction time, transport failures, non-2xx responses with the
//! server's status preserved, non-advancing pagination cursors, and
//! malformed response bodies.

use thiserror::Error;

/// What went wrong below the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// The request exceeded the configured timeout.
    Timeout,
    /// The connection could not be established.
    Connect,
    /// Any other transport failure (TLS, protocol, body read).
    Other,
}

/// Errors returned by every operation of the client.
#[derive(Error, Debug)]
pub enum CloudError {
    /// Missing or invalid credentials/configuration. Raised at construction
    /// or resolution time, never from a network call.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Connectivity or timeout failure before an HTTP status was received.
    #[error("transport error: {message}")]
    Transport {
        kind: TransportKind,
        message: String,
    },

    /// Non-2xx response. `body` is the raw response text.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The server stopped advancing the pagination cursor.
    #[error("pagination error: {0}")]
    Pagination(String),

    /// The response body could not be decoded into the expected shape.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl CloudError {
    /// HTTP status code, when the failure came from a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            CloudError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            CloudError::Transport {
                kind: TransportKind::Timeout,
                ..
            }
        )
    }

    /// True for transient failures that may succeed on retry: rate limiting
    /// (429), server-side errors (5xx), and transport failures. The client
    /// never retries on its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            CloudError::Transport { .. } => true,
            CloudError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for CloudError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportKind::Timeout
        } else if err.is_connect() {
            TransportKind::Connect
        } else {
            TransportKind::Other
        };
        CloudError::Transport {
            kind,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CloudError {
    fn from(err: serde_json::Error) -> Self {
        CloudError::Deserialization(err.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CloudError>;
