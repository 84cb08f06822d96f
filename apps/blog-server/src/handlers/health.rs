//! Health endpoint - liveness plus a glance at the content provider.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use quill_core::ports::ReadRepository;

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub posts: usize,
    pub users: usize,
    pub timestamp: String,
}

/// GET /api/health
///
/// Reports liveness along with how much content the provider is serving,
/// which doubles as a check that the dataset got wired into state.
pub async fn health_check(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?.len();
    let users = state.users.list_all().await?.len();

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        service: "blog-server",
        version: env!("CARGO_PKG_VERSION"),
        posts,
        users,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
