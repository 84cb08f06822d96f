//! File-backed session storage - the server-side stand-in for the
//! browser's local storage.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::ports::{SessionStorage, StorageError};

/// Durable key-value storage persisted as one JSON object on disk.
///
/// The file is loaded tolerantly: a missing or unparseable file starts the
/// store empty rather than failing, matching the contract that malformed
/// persisted state means "no session". Every mutation writes the file
/// through; values are small, so the synchronous write is acceptable.
pub struct FileSessionStorage {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileSessionStorage {
    /// Open storage at `path`, reading any existing contents.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    fn load(path: &Path) -> HashMap<String, String> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return HashMap::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %path.display(), "discarding unparseable session file: {}", e);
                HashMap::new()
            }
        }
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
            }
        }

        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| StorageError::Io(e.to_string()))
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        self.flush(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let storage = FileSessionStorage::open(&path);
        storage.set("current_user", "{\"id\":1}").await.unwrap();
        drop(storage);

        let reopened = FileSessionStorage::open(&path);
        assert_eq!(
            reopened.get("current_user").await,
            Some("{\"id\":1}".to_string())
        );
    }

    #[tokio::test]
    async fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let storage = FileSessionStorage::open(&path);
        storage.set("current_user", "x").await.unwrap();
        storage.remove("current_user").await.unwrap();
        drop(storage);

        let reopened = FileSessionStorage::open(&path);
        assert_eq!(reopened.get("current_user").await, None);
    }

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::open(dir.path().join("absent.json"));
        assert_eq!(storage.get("current_user").await, None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json at all").unwrap();

        let storage = FileSessionStorage::open(&path);
        assert_eq!(storage.get("current_user").await, None);

        // And the store remains usable.
        storage.set("current_user", "y").await.unwrap();
        assert_eq!(storage.get("current_user").await, Some("y".to_string()));
    }

    #[tokio::test]
    async fn test_parent_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/session.json");

        let storage = FileSessionStorage::open(&path);
        storage.set("k", "v").await.unwrap();
        assert!(path.exists());
    }
}
