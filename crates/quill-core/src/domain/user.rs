use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authorization level attached to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Ordinary user with no editorial rights.
    Reader,
    Editor,
    SuperAdmin,
}

impl Role {
    /// The serialized snake_case name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Reader => "reader",
            Role::Editor => "editor",
            Role::SuperAdmin => "super_admin",
        }
    }
}

/// User entity - an author or reader of the blog.
///
/// Users are read-only reference data; the session snapshot persisted to
/// durable storage is a serialized copy of one of these records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub joined_at: DateTime<Utc>,
}

impl User {
    /// Create an active user with a generated ID and the current join date.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            role,
            is_active: true,
            bio: None,
            avatar: None,
            joined_at: Utc::now(),
        }
    }
}
