//! HTTP transport port

use async_trait::async_trait;
use thiserror::Error;
use wellspring_domain::RequestDescriptor;

/// A raw response as received from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Canonical reason phrase, e.g. `Not Found`.
    pub reason: String,
    /// Body bytes, possibly empty.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(status: u16, reason: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns true if the body is empty or whitespace only.
    #[must_use]
    pub fn is_body_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }
}

/// Failures that happen before any HTTP response is received.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Host name resolution failed.
    #[error("DNS resolution failed for {host}: {message}")]
    Dns {
        /// Host being resolved.
        host: String,
        /// Underlying message.
        message: String,
    },

    /// The peer refused the connection.
    #[error("connection refused by {host}")]
    ConnectionRefused {
        /// Host that refused.
        host: String,
    },

    /// The connection failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The transport's own timeout fired.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Timeout in milliseconds.
        timeout_ms: u64,
    },

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for sending one HTTP request.
///
/// Implementations perform exactly one attempt; retries and timeouts are
/// the request core's responsibility.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns whatever the server answered.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if no response was received.
    async fn send(&self, request: RequestDescriptor) -> Result<TransportResponse, TransportError>;
}
