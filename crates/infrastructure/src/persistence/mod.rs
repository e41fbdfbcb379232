//! Durable storage adapters.

mod file_system;
mod file_token_storage;
mod memory_token_storage;

pub use file_system::TokioFileSystem;
pub use file_token_storage::FileTokenStorage;
pub use memory_token_storage::InMemoryTokenStorage;
