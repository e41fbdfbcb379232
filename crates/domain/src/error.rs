//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The configured base URL is malformed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The user role is not one the platform knows about.
    #[error("unknown user role: {0}")]
    UnknownRole(String),

    /// The assessment kind is not one the platform knows about.
    #[error("unknown assessment kind: {0}")]
    UnknownAssessmentKind(String),

    /// A retry policy with zero attempts was requested.
    #[error("max attempts must be at least 1")]
    ZeroAttempts,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
