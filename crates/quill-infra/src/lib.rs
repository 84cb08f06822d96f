//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! session storage (in-memory and file-backed), the static credential
//! policy, and the seeded in-memory dataset that stands in for a real
//! content provider.

pub mod auth;
pub mod dataset;
pub mod storage;

pub use auth::{CredentialPolicy, StaticCredentialVerifier};
pub use dataset::{MemoryPostRepository, MemoryUserRepository};
pub use storage::{FileSessionStorage, MemorySessionStorage};
