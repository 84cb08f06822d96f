//! Session store - the single current authenticated identity.
//!
//! An explicit service object: dependencies are injected at construction and
//! the session travels with the value, never through ambient globals. The
//! store holds at most one authenticated user; the authenticated flag is true
//! if and only if a user is present.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Role, User};
use crate::error::RepoError;
use crate::ports::{CredentialVerifier, SessionStorage, StorageError, UserRepository};

/// Well-known durable-storage key for the persisted session snapshot.
pub const SESSION_KEY: &str = "current_user";

/// Infrastructure failures surfaced by session operations.
///
/// Authentication failures are never reported this way; `login` answers
/// `Ok(false)` uniformly, without revealing which part of the check failed.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("repository error: {0}")]
    Repository(#[from] RepoError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// The session store. Two states: unauthenticated (no user) and
/// authenticated (exactly one user). Login and restore move forward,
/// logout moves back, a repeated login replaces the session in place.
pub struct SessionStore {
    users: Arc<dyn UserRepository>,
    verifier: Arc<dyn CredentialVerifier>,
    storage: Arc<dyn SessionStorage>,
    current: Option<User>,
}

impl SessionStore {
    /// Create an unauthenticated store. Call [`restore`](Self::restore) to
    /// adopt a previously persisted identity.
    pub fn new(
        users: Arc<dyn UserRepository>,
        verifier: Arc<dyn CredentialVerifier>,
        storage: Arc<dyn SessionStorage>,
    ) -> Self {
        Self {
            users,
            verifier,
            storage,
            current: None,
        }
    }

    /// Adopt the persisted session snapshot, if one exists and parses.
    /// Malformed content is discarded and treated as no session.
    pub async fn restore(&mut self) {
        if let Some(raw) = self.storage.get(SESSION_KEY).await {
            if let Ok(user) = serde_json::from_str::<User>(&raw) {
                self.current = Some(user);
            }
        }
    }

    /// Attempt to authenticate. `Ok(true)` adopts the user and persists the
    /// snapshot (overwriting any prior one); `Ok(false)` covers every
    /// authentication failure - unknown email, inactive account, or wrong
    /// secret - without distinguishing them. `Err` is reserved for storage
    /// failures while persisting.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<bool, SessionError> {
        // Lookup happens among the active user set only.
        let user = match self.users.find_by_email(email).await? {
            Some(user) if user.is_active => user,
            _ => return Ok(false),
        };

        if !self.verifier.verify(&user, password) {
            return Ok(false);
        }

        let snapshot = serde_json::to_string(&user)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set(SESSION_KEY, &snapshot).await?;
        self.current = Some(user);
        Ok(true)
    }

    /// Clear the session and delete the persisted snapshot. Idempotent.
    pub async fn logout(&mut self) -> Result<(), SessionError> {
        self.current = None;
        self.storage.remove(SESSION_KEY).await?;
        Ok(())
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// True for super-admin and editor sessions. The post ID is accepted but
    /// not consulted: authorization is role-only, matching the observed
    /// behavior of the system this replaces.
    pub fn can_edit(&self, _post_id: Uuid) -> bool {
        self.has_editorial_role()
    }

    /// Same rule as [`can_edit`](Self::can_edit), kept as a separate name
    /// because callers treat moderation as its own capability.
    pub fn can_moderate(&self) -> bool {
        self.has_editorial_role()
    }

    /// True only for super-admin sessions.
    pub fn can_admin(&self) -> bool {
        matches!(self.role(), Some(Role::SuperAdmin))
    }

    fn has_editorial_role(&self) -> bool {
        matches!(self.role(), Some(Role::SuperAdmin | Role::Editor))
    }

    fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|u| u.role)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::ports::ReadRepository;

    struct FixedUsers(Vec<User>);

    #[async_trait]
    impl ReadRepository<User, Uuid> for FixedUsers {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
            Ok(self.0.iter().find(|u| u.id == id).cloned())
        }

        async fn list_all(&self) -> Result<Vec<User>, RepoError> {
            Ok(self.0.clone())
        }
    }

    #[async_trait]
    impl UserRepository for FixedUsers {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
            Ok(self.0.iter().find(|u| u.email == email).cloned())
        }
    }

    /// Accepts one shared secret for everyone; policy details are tested
    /// with the real verifier in the infra crate.
    struct SharedSecret(&'static str);

    impl CredentialVerifier for SharedSecret {
        fn verify(&self, _user: &User, password: &str) -> bool {
            password == self.0
        }
    }

    #[derive(Default)]
    struct MapStorage(Mutex<HashMap<String, String>>);

    #[async_trait]
    impl SessionStorage for MapStorage {
        async fn get(&self, key: &str) -> Option<String> {
            self.0.lock().unwrap().get(key).cloned()
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.lock().unwrap().insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.0.lock().unwrap().remove(key);
            Ok(())
        }
    }

    fn sample_users() -> Vec<User> {
        let mut inactive = User::new("Dormant", "dormant@example.com", Role::Editor);
        inactive.is_active = false;

        vec![
            User::new("Admin", "admin@example.com", Role::SuperAdmin),
            User::new("Editor", "editor@example.com", Role::Editor),
            User::new("Reader", "reader@example.com", Role::Reader),
            inactive,
        ]
    }

    fn store_with(storage: Arc<dyn SessionStorage>) -> SessionStore {
        SessionStore::new(
            Arc::new(FixedUsers(sample_users())),
            Arc::new(SharedSecret("letmein")),
            storage,
        )
    }

    #[tokio::test]
    async fn login_adopts_and_persists_the_user() {
        let storage = Arc::new(MapStorage::default());
        let mut store = store_with(storage.clone());

        assert!(store.login("editor@example.com", "letmein").await.unwrap());
        assert!(store.is_authenticated());
        assert_eq!(store.current_user().unwrap().email, "editor@example.com");

        let snapshot = storage.get(SESSION_KEY).await.expect("snapshot persisted");
        let persisted: User = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(persisted.email, "editor@example.com");
    }

    #[tokio::test]
    async fn wrong_secret_and_unknown_email_fail_alike() {
        let mut store = store_with(Arc::new(MapStorage::default()));

        assert!(!store.login("editor@example.com", "nope").await.unwrap());
        assert!(!store.login("nobody@example.com", "letmein").await.unwrap());
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn inactive_user_cannot_login_regardless_of_secret() {
        let mut store = store_with(Arc::new(MapStorage::default()));

        assert!(!store.login("dormant@example.com", "letmein").await.unwrap());
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn repeated_login_replaces_the_session() {
        let storage = Arc::new(MapStorage::default());
        let mut store = store_with(storage.clone());

        assert!(store.login("editor@example.com", "letmein").await.unwrap());
        assert!(store.login("reader@example.com", "letmein").await.unwrap());

        assert_eq!(store.current_user().unwrap().email, "reader@example.com");
        let snapshot = storage.get(SESSION_KEY).await.unwrap();
        assert!(snapshot.contains("reader@example.com"));
    }

    #[tokio::test]
    async fn logout_clears_session_and_snapshot_and_is_idempotent() {
        let storage = Arc::new(MapStorage::default());
        let mut store = store_with(storage.clone());

        store.login("editor@example.com", "letmein").await.unwrap();
        store.logout().await.unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(storage.get(SESSION_KEY).await, None);

        // Safe with no active session.
        store.logout().await.unwrap();
    }

    #[tokio::test]
    async fn restore_adopts_a_well_formed_snapshot() {
        let storage = Arc::new(MapStorage::default());
        {
            let mut first = store_with(storage.clone());
            first.login("admin@example.com", "letmein").await.unwrap();
        }

        let mut restarted = store_with(storage);
        restarted.restore().await;
        assert!(restarted.is_authenticated());
        assert_eq!(restarted.current_user().unwrap().email, "admin@example.com");
    }

    #[tokio::test]
    async fn restore_after_logout_stays_unauthenticated() {
        let storage = Arc::new(MapStorage::default());
        {
            let mut first = store_with(storage.clone());
            first.login("admin@example.com", "letmein").await.unwrap();
            first.logout().await.unwrap();
        }

        let mut restarted = store_with(storage);
        restarted.restore().await;
        assert!(!restarted.is_authenticated());
    }

    #[tokio::test]
    async fn malformed_snapshot_is_treated_as_absent() {
        let storage = Arc::new(MapStorage::default());
        storage.set(SESSION_KEY, "{not json").await.unwrap();

        let mut store = store_with(storage);
        store.restore().await;
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn predicates_follow_roles() {
        let post_id = Uuid::new_v4();
        let mut store = store_with(Arc::new(MapStorage::default()));

        // No session: everything false.
        assert!(!store.can_edit(post_id));
        assert!(!store.can_moderate());
        assert!(!store.can_admin());

        store.login("reader@example.com", "letmein").await.unwrap();
        assert!(!store.can_edit(post_id));
        assert!(!store.can_moderate());
        assert!(!store.can_admin());

        store.login("editor@example.com", "letmein").await.unwrap();
        assert!(store.can_edit(post_id));
        assert!(store.can_moderate());
        assert!(!store.can_admin());

        store.login("admin@example.com", "letmein").await.unwrap();
        assert!(store.can_edit(post_id));
        assert!(store.can_moderate());
        assert!(store.can_admin());
    }
}
