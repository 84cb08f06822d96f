//! # Quill Core
//!
//! The domain layer of the Quill blog engine.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the content renderer, the session store, and the ports the adapters implement.

pub mod domain;
pub mod error;
pub mod ports;
pub mod render;
pub mod session;

pub use error::RepoError;
pub use render::render_markdown;
pub use session::{SessionError, SessionStore};
