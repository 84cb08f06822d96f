//! Vec-backed read-only repositories.

use async_trait::async_trait;
use uuid::Uuid;

use quill_core::domain::{Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{PostRepository, ReadRepository, UserRepository};

/// User repository over a fixed in-memory collection.
pub struct MemoryUserRepository {
    users: Vec<User>,
}

impl MemoryUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl ReadRepository<User, Uuid> for MemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.users.clone())
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }
}

/// Post repository over a fixed in-memory collection.
pub struct MemoryPostRepository {
    posts: Vec<Post>,
}

impl MemoryPostRepository {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

#[async_trait]
impl ReadRepository<Post, Uuid> for MemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.clone())
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {}
