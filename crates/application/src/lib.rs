//! Wellspring Application - Request core, token store and services
//!
//! This crate defines the application layer with:
//! - Port traits (transport, token storage, clock)
//! - The retrying request core and the token store
//! - Typed service wrappers for each platform area

pub mod api_client;
pub mod auth;
pub mod error;
pub mod fallback;
pub mod ports;
pub mod services;

#[cfg(test)]
mod test_support;

pub use api_client::ApiClient;
pub use auth::TokenStore;
pub use error::{ApiError, ApiResult, GENERIC_ERROR_MESSAGE, StorageError};
pub use fallback::{Candidate, first_success};
pub use ports::{
    Clock, FileSystem, FileSystemError, HttpTransport, TokenRefresher, TokenStorage,
    TransportError, TransportResponse,
};
pub use services::{
    AssessmentService, AuthService, ComplaintService, DashboardService, HabitService,
    TherapistService,
};
