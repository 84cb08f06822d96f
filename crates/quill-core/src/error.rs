//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// The in-memory dataset never fails, but the port contract leaves room for
/// a future API or database backed provider.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Backend connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
