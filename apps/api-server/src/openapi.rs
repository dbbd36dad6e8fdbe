//! OpenAPI document for the posts API, served at `GET /api/openapi.json`.

use actix_web::HttpResponse;
use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

use quill_core::domain::Post;
use quill_shared::dto::{CreatePostRequest, UpdatePostRequest};
use quill_shared::{ErrorDetail, ErrorResponse};

use crate::handlers::posts;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quill Posts API",
        description = "Authenticated CRUD over posts. Every post route requires a JWT bearer token.",
        license(name = "MIT")
    ),
    paths(
        posts::create_post,
        posts::list_posts,
        posts::get_post,
        posts::update_post,
        posts::delete_post,
    ),
    components(schemas(Post, CreatePostRequest, UpdatePostRequest, ErrorResponse, ErrorDetail)),
    tags(
        (name = "Posts", description = "Create, read, update and delete posts"),
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

/// GET /api/openapi.json
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
