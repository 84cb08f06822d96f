//! Read-view handlers: post listing and the rendered post detail.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::ports::ReadRepository;
use quill_core::render_markdown;
use quill_shared::dto::{AuthorResponse, PostDetail, PostSummary};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;
    let users = state.users.list_all().await?;

    let summaries: Vec<PostSummary> = posts
        .into_iter()
        .map(|post| {
            let author_name = users
                .iter()
                .find(|u| u.id == post.author_id)
                .map(|u| u.name.clone());
            PostSummary {
                id: post.id,
                title: post.title,
                excerpt: post.excerpt,
                category: post.category,
                tags: post.tags,
                is_featured: post.is_featured,
                featured_image: post.featured_image,
                view_count: post.view_count,
                published_at: post.published_at,
                author_name,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(summaries))
}

/// GET /api/posts/{id}
///
/// The full read view: metadata, the author block, the markdown body
/// rendered to HTML, and the session's edit affordance for this post.
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id}")))?;

    let author = state
        .users
        .find_by_id(post.author_id)
        .await?
        .map(|u| AuthorResponse {
            name: u.name,
            bio: u.bio,
            avatar: u.avatar,
            joined_at: u.joined_at,
        });

    let can_edit = state.session.read().await.can_edit(post.id);

    let detail = PostDetail {
        id: post.id,
        title: post.title,
        excerpt: post.excerpt,
        html: render_markdown(&post.content),
        category: post.category,
        tags: post.tags,
        is_featured: post.is_featured,
        featured_image: post.featured_image,
        view_count: post.view_count,
        published_at: post.published_at,
        updated_at: post.updated_at,
        author,
        can_edit,
    };

    Ok(HttpResponse::Ok().json(detail))
}
