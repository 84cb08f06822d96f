use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// Generic read-only repository.
///
/// The core consumes posts and users from an external provider (the seeded
/// mock dataset today, an API or database later); no write-back interface is
/// required.
#[async_trait]
pub trait ReadRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// List every entity the provider knows about.
    async fn list_all(&self) -> Result<Vec<T>, RepoError>;
}

/// User repository with domain-specific lookups.
#[async_trait]
pub trait UserRepository: ReadRepository<User, Uuid> {
    /// Find a user by their email address (exact match).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: ReadRepository<Post, Uuid> {}
