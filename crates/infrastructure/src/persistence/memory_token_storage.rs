//! In-memory token storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use wellspring_application::StorageError;
use wellspring_application::ports::TokenStorage;

/// Thread-safe in-memory storage. Clones share the same map.
///
/// Nothing survives the process; used for `--ephemeral` sessions and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenStorage {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryTokenStorage {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStorage for InMemoryTokenStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.read().await;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.values.write().await;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_values() {
        let storage = InMemoryTokenStorage::new();
        let other = storage.clone();

        storage.set("auth_token", "abc").await.unwrap();
        assert_eq!(other.get("auth_token").await.unwrap().as_deref(), Some("abc"));

        other.remove("auth_token").await.unwrap();
        assert_eq!(storage.get("auth_token").await.unwrap(), None);
    }
}
