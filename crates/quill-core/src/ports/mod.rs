//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod credentials;
mod repository;
mod storage;

pub use credentials::CredentialVerifier;
pub use repository::{PostRepository, ReadRepository, UserRepository};
pub use storage::{SessionStorage, StorageError};
