//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/posts`.
///
/// Fields are optional so that a missing field reaches the storage
/// validation and is reported like an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    #[serde(default)]
    #[schema(example = "Hello")]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(example = "First post")]
    pub content: Option<String>,
}

/// Body of `PUT /api/posts/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}
