//! Application error types

use serde::Deserialize;
use thiserror::Error;
use wellspring_domain::{DomainError, is_retryable_status};

use crate::ports::TransportError;

/// Message used when nothing more specific is known.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Errors surfaced by the request core and the services built on it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    ///
    /// Displays as the server-provided message alone.
    #[error("{message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message from the error body, or `HTTP <status>: <reason>`.
        message: String,
        /// Machine-readable code from the error body, if any.
        code: Option<String>,
    },

    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    /// An attempt exceeded the per-attempt timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The timeout that was exceeded.
        timeout_ms: u64,
    },

    /// A 2xx body could not be decoded into the expected type.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The token storage failed.
    #[error("token storage error: {0}")]
    Storage(String),

    /// A fallback chain was given nothing to try.
    #[error("no request candidates to try")]
    NoCandidates,
}

impl ApiError {
    /// Whether repeating the same request may succeed.
    ///
    /// Decided on the numeric status, never on message text.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Http { status, .. } => is_retryable_status(*status),
            Self::Network(_) | Self::Timeout { .. } => true,
            Self::Decode(_) | Self::InvalidRequest(_) | Self::Storage(_) | Self::NoCandidates => {
                false
            }
        }
    }

    /// HTTP status, if the server responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for showing inline next to the failed action.
    #[must_use]
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// Builds an `Http` error from a non-2xx response body.
    ///
    /// Takes `message` (or `error`) and `code` from a JSON body; falls back to
    /// `HTTP <status>: <reason>` when the body is not JSON or has no message.
    #[must_use]
    pub fn from_response(status: u16, reason: &str, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<ErrorBody>(body).ok();
        let code = parsed.as_ref().and_then(|b| b.code.as_ref()).map(|c| match c {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        });
        let message = parsed
            .and_then(|b| b.message.or(b.error))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP {status}: {reason}"));

        Self::Http {
            status,
            message,
            code,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Timeout { timeout_ms } => Self::Timeout { timeout_ms },
            // A URL that cannot be built fails the same way on every attempt.
            TransportError::InvalidUrl(url) => Self::InvalidRequest(format!("invalid URL: {url}")),
            other => Self::Network(other.to_string()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self::InvalidRequest(error.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<serde_json::Value>,
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from a token storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<StorageError> for ApiError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error.to_string())
    }
}
