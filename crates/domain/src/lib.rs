//! Wellspring Domain - Core types
//!
//! This crate defines the domain model for the Wellspring API client.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod request;
pub mod retry;

pub use auth::{ClaimsDecode, InvalidToken, TokenClaims, UserRole, decode_claims};
pub use config::{ClientConfig, DEFAULT_TIMEOUT_MS, EXPIRY_BUFFER, TOKEN_STORAGE_KEY};
pub use error::{DomainError, DomainResult};
pub use request::{HttpMethod, RequestDescriptor, RequestOptions};
pub use retry::{DEFAULT_MAX_ATTEMPTS, RetryPolicy, is_retryable_status};
