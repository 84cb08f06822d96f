//! Data Transfer Objects - request/response types for the HTTP surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A user's public information. Never carries credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

/// Author block attached to a rendered post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub joined_at: DateTime<Utc>,
}

/// One entry in the post listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub tags: Vec<String>,
    pub is_featured: bool,
    pub featured_image: Option<String>,
    pub view_count: u64,
    pub published_at: Option<DateTime<Utc>>,
    /// Resolved author display name; `None` when the weak author reference
    /// points at an unknown user.
    pub author_name: Option<String>,
}

/// The full read view of a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    /// The markdown body rendered to HTML. Trusted markup: the client is
    /// expected to insert it without further escaping.
    pub html: String,
    pub category: String,
    pub tags: Vec<String>,
    pub is_featured: bool,
    pub featured_image: Option<String>,
    pub view_count: u64,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    pub author: Option<AuthorResponse>,
    /// Whether the current session may edit this post; drives UI affordances.
    pub can_edit: bool,
}
