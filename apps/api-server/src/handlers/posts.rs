//! Post handlers.
//!
//! Every route sits behind the [`Identity`] gate. Only `list_posts` scopes
//! its query to the caller; lookups by id do not check ownership.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{Post, PostChanges};
use quill_shared::{ApiResponse, ErrorResponse};
use quill_shared::dto::{CreatePostRequest, UpdatePostRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const POST_NOT_FOUND: &str = "Post not found";

/// A malformed id is reported as a server error, not a 404.
fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|e| AppError::Internal(format!("Invalid post id \"{}\": {}", raw, e)))
}

/// POST /api/posts
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "Posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = ApiResponse<Post>),
        (status = 400, description = "Validation error or malformed body", body = ErrorResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_post(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = Post::new(
        identity.user_id,
        req.title.unwrap_or_default(),
        req.content.unwrap_or_default(),
    );
    let saved = state.posts.insert(post).await?;

    tracing::info!(post_id = %saved.id, user_id = %saved.user_id, "Post created");

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        saved,
        "Post created successfully",
    )))
}

/// GET /api/posts
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "Posts",
    responses(
        (status = 200, description = "Posts owned by the caller", body = ApiResponse<Vec<Post>>),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_posts(
    identity: Identity,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.find_by_user_id(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{id}
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post found", body = ApiResponse<Post>),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Server error, including a malformed id", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_post(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// PUT /api/posts/{id}
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(("id" = String, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = ApiResponse<Post>),
        (status = 400, description = "Validation error or malformed body", body = ErrorResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Server error, including a malformed id", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_post(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let req = body.into_inner();

    let changes = PostChanges {
        title: req.title,
        content: req.content,
    };
    let updated = state
        .posts
        .find_by_id_and_update(id, changes)
        .await?
        .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))?;

    tracing::info!(post_id = %updated.id, "Post updated");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        updated,
        "Post updated successfully",
    )))
}

/// DELETE /api/posts/{id}
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "Posts",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted, confirmation message only"),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Server error, including a malformed id", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_post(
    _identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let deleted = state
        .posts
        .find_by_id_and_delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))?;

    tracing::info!(post_id = %deleted.id, "Post deleted");

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("Post deleted successfully")))
}
