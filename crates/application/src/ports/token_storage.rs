//! Durable key/value storage port for the bearer token.

use async_trait::async_trait;

use crate::error::StorageError;

/// Durable string storage keyed by name.
///
/// Implementations must make writes visible to every other handle on the
/// same backing store.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Reads a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes a value. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
