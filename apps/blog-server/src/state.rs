//! Application state - shared across all handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use quill_core::SessionStore;
use quill_core::ports::{CredentialVerifier, PostRepository, SessionStorage, UserRepository};
use quill_infra::auth::{CredentialPolicy, StaticCredentialVerifier};
use quill_infra::dataset::{MemoryPostRepository, MemoryUserRepository, seed};
use quill_infra::storage::FileSessionStorage;

use crate::config::AppConfig;

/// Shared application state.
///
/// The session store is a single slot by design: the server models one
/// client session, mirroring the single-identity contract of the core.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub session: Arc<RwLock<SessionStore>>,
}

impl AppState {
    /// Build the application state: seed the dataset, open the session
    /// file, and restore any persisted identity.
    pub async fn new(config: &AppConfig) -> Self {
        let (seed_users, seed_posts) = seed::dataset();
        let users: Arc<dyn UserRepository> = Arc::new(MemoryUserRepository::new(seed_users));
        let posts: Arc<dyn PostRepository> = Arc::new(MemoryPostRepository::new(seed_posts));

        let storage: Arc<dyn SessionStorage> =
            Arc::new(FileSessionStorage::open(&config.session_file));
        let verifier: Arc<dyn CredentialVerifier> =
            Arc::new(StaticCredentialVerifier::new(CredentialPolicy::from_env()));

        let mut session = SessionStore::new(users.clone(), verifier, storage);
        session.restore().await;
        if let Some(user) = session.current_user() {
            tracing::info!(email = %user.email, "Restored persisted session");
        }

        tracing::info!("Application state initialized");

        Self {
            users,
            posts,
            session: Arc::new(RwLock::new(session)),
        }
    }
}
