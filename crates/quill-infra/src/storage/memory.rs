//! In-memory session storage - used in tests and as fallback when no
//! storage path is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::ports::{SessionStorage, StorageError};

/// In-memory key-value store behind an async RwLock.
///
/// Note: contents are lost on process restart, so a session "persisted"
/// here does not survive a restart.
pub struct MemorySessionStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemorySessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
