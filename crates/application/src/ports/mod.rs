//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the request core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod file_system;
mod http_transport;
mod token_refresher;
mod token_storage;

pub use clock::Clock;
pub use file_system::{FileSystem, FileSystemError};
pub use http_transport::{HttpTransport, TransportError, TransportResponse};
pub use token_refresher::TokenRefresher;
pub use token_storage::TokenStorage;
