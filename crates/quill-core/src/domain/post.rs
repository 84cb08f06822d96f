use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a blog article with markdown-flavored content.
///
/// Posts are immutable once loaded; `author_id` is a weak reference into the
/// user set and may point at a user the provider no longer knows about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author_id: Uuid,
    pub category: String,
    /// Insertion-order tag labels. Duplicates are kept as authored.
    pub tags: Vec<String>,
    pub is_featured: bool,
    pub featured_image: Option<String>,
    pub view_count: u64,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new unpublished post.
    pub fn new(author_id: Uuid, title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            excerpt: String::new(),
            content: content.into(),
            author_id,
            category: String::new(),
            tags: Vec::new(),
            is_featured: false,
            featured_image: None,
            view_count: 0,
            published_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}
