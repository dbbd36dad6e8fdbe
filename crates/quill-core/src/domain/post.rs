use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Post entity - a piece of content owned by exactly one user.
///
/// Title and content rules are checked by the repositories before a write,
/// not by the HTTP layer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `user_id`.
    pub fn new(user_id: Uuid, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Owner and id are never touched.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        self.updated_at = Utc::now();
    }
}

/// Fields a caller may replace on an existing post. `None` leaves the
/// stored value unchanged.
#[derive(Debug, Clone, Default, Validate)]
pub struct PostChanges {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: Option<String>,
}
