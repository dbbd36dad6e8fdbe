use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostChanges};
use crate::error::RepoError;

/// Generic repository trait defining the lookups every entity supports.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Validate and insert a new entity, returning the stored record.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID, returning the removed record.
    /// `Ok(None)` means nothing matched.
    async fn find_by_id_and_delete(&self, id: ID) -> Result<Option<T>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts owned by `user_id`, in storage order.
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Post>, RepoError>;

    /// Validate `changes`, apply them to the post with `id` and return the
    /// updated record. `Ok(None)` means no post has that id.
    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<Option<Post>, RepoError>;
}
