//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use quill_core::{RepoError, SessionError};
use quill_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Covers every authentication failure uniformly; no reason is leaked.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Unauthorized => ErrorResponse::unauthorized(),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        tracing::error!("Repository error: {}", err);
        AppError::Internal("Data provider error".to_string())
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        tracing::error!("Session error: {}", err);
        AppError::Internal("Session storage error".to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
