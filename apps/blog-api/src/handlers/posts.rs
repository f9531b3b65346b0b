//! `/posts` resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::NewPost;
use blog_core::ports::{BaseRepository, PostRepository};
use blog_shared::dto::{CreatePostRequest, JsonObject, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: Uuid) -> DomainError {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<JsonObject>,
) -> AppResult<HttpResponse> {
    let req = CreatePostRequest::try_from(body.into_inner())?;
    let new_post = NewPost::try_from(req)?;
    let post = state.posts.create(new_post).await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// PUT /posts/{id}
///
/// Answers 201 on success; existing clients depend on that status.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<JsonObject>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = UpdatePostRequest::try_from(body.into_inner())?;

    if let Some(body_id) = req.id.as_deref() {
        if body_id.parse::<Uuid>().ok() != Some(id) {
            return Err(AppError::BadRequest(format!(
                "Request path id ({}) and request body id ({}) must match",
                id, body_id
            )));
        }
    }

    let changes = req.into_changes();
    if changes.is_empty() {
        return Err(AppError::BadRequest(
            "Request body must include `title` or `content`".to_string(),
        ));
    }

    let post = state
        .posts
        .update(id, changes)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(post_id = %id, "Post updated");

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// DELETE /posts/{id}
///
/// Deleting an id that does not exist still answers 204.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let existed = state.posts.delete(id).await?;
    tracing::info!(post_id = %id, existed, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
