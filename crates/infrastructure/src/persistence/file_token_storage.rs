//! File-backed token storage.
//!
//! Values live in one JSON object on disk:
//! ```json
//! {
//!   "auth_token": "eyJhbGciOi..."
//! }
//! ```
//! The file is read on every lookup, so separate processes sharing the
//! file observe each other's writes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use wellspring_application::ports::{FileSystem, FileSystemError, TokenStorage};
use wellspring_application::StorageError;

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

/// Converts `FileSystemError` to `std::io::Error` for `StorageError`.
fn to_io_error(e: FileSystemError) -> std::io::Error {
    match e {
        FileSystemError::Io(io_err) => io_err,
        FileSystemError::NotFound(path) => {
            std::io::Error::new(std::io::ErrorKind::NotFound, path.display().to_string())
        }
        FileSystemError::PermissionDenied(path) => std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            path.display().to_string(),
        ),
    }
}

/// Token storage persisted in a JSON file.
#[derive(Debug, Clone)]
pub struct FileTokenStorage<F> {
    fs: F,
    path: PathBuf,
}

impl<F: FileSystem> FileTokenStorage<F> {
    /// Creates storage backed by the file at `path`.
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.fs.exists(&self.path).await {
            return Ok(BTreeMap::new());
        }

        let content = self
            .fs
            .read_file(&self.path)
            .await
            .map_err(|e| StorageError::Io(to_io_error(e)))?;

        from_json_bytes(&content).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    async fn save(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content =
            to_json_stable_bytes(values).map_err(|e| StorageError::Serialization(e.to_string()))?;

        self.fs
            .write_file(&self.path, &content)
            .await
            .map_err(|e| StorageError::Io(to_io_error(e)))
    }
}

#[async_trait]
impl<F: FileSystem + Sync> TokenStorage for FileTokenStorage<F> {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut values = self.load().await?;
        Ok(values.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.load().await?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.load().await?;
        if values.remove(key).is_none() {
            return Ok(());
        }
        self.save(&values).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::TokioFileSystem;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempdir().expect("Failed to create temp directory");
        let storage = FileTokenStorage::new(TokioFileSystem::new(), dir.path().join("storage.json"));

        assert_eq!(storage.get("auth_token").await.unwrap(), None);
        assert!(storage.remove("auth_token").await.is_ok());
    }

    #[tokio::test]
    async fn test_set_get_remove() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("nested").join("storage.json");
        let storage = FileTokenStorage::new(TokioFileSystem::new(), &path);

        storage.set("auth_token", "abc.def.ghi").await.unwrap();
        assert!(path.exists());
        assert_eq!(
            storage.get("auth_token").await.unwrap().as_deref(),
            Some("abc.def.ghi")
        );

        storage.remove("auth_token").await.unwrap();
        assert_eq!(storage.get("auth_token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_two_handles_see_same_value() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("storage.json");
        let writer = FileTokenStorage::new(TokioFileSystem::new(), &path);
        let reader = FileTokenStorage::new(TokioFileSystem::new(), &path);

        writer.set("auth_token", "first").await.unwrap();
        writer.set("auth_token", "second").await.unwrap();

        assert_eq!(reader.get("auth_token").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_serialization_error() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("storage.json");
        std::fs::write(&path, b"not json").unwrap();
        let storage = FileTokenStorage::new(TokioFileSystem::new(), &path);

        assert!(matches!(
            storage.get("auth_token").await,
            Err(StorageError::Serialization(_))
        ));
    }
}
