use async_trait::async_trait;

/// Durable key-value storage for the session snapshot.
///
/// The contract mirrors client-local storage: string keys, string values,
/// absence is an `Option`, never an error. Malformed content is the caller's
/// problem to tolerate.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Get a value, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Option<String>;

    /// Set a value, overwriting any prior one.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage operation errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O failed: {0}")]
    Io(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}
