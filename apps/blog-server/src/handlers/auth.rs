//! Session handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::User;
use quill_shared::dto::{LoginRequest, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn user_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role.as_str().to_string(),
        joined_at: user.joined_at,
    }
}

/// POST /api/auth/login
///
/// Every authentication failure answers 401 without saying which part of
/// the check failed.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut session = state.session.write().await;
    if !session.login(&req.email, &req.password).await? {
        return Err(AppError::Unauthorized);
    }

    let user = session
        .current_user()
        .ok_or_else(|| AppError::Internal("session empty after login".to_string()))?;

    tracing::info!(email = %user.email, "Login succeeded");
    Ok(HttpResponse::Ok().json(user_response(user)))
}

/// POST /api/auth/logout
pub async fn logout(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.session.write().await.logout().await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/auth/me
pub async fn me(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let session = state.session.read().await;
    let user = session.current_user().ok_or(AppError::Unauthorized)?;
    Ok(HttpResponse::Ok().json(user_response(user)))
}
