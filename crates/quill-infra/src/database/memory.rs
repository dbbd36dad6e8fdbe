//! In-memory post repository - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use validator::Validate;

use quill_core::domain::{Post, PostChanges};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

/// In-memory post store backed by a `Vec` behind an async RwLock.
///
/// Posts are kept in insertion order. Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        post.validate()?;

        let mut store = self.store.write().await;
        store.push(post.clone());
        Ok(post)
    }

    async fn find_by_id_and_delete(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let mut store = self.store.write().await;
        let index = store.iter().position(|p| p.id == id);
        Ok(index.map(|index| store.remove(index)))
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<Option<Post>, RepoError> {
        changes.validate()?;

        let mut store = self.store.write().await;
        Ok(store.iter_mut().find(|p| p.id == id).map(|post| {
            post.apply(changes);
            post.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(owner: Uuid, title: &str) -> Post {
        Post::new(owner, title.to_string(), "body".to_string())
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.insert(post(Uuid::new_v4(), "First")).await.unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found.title, "First");
    }

    #[tokio::test]
    async fn test_insert_rejects_empty_title() {
        let repo = InMemoryPostRepository::new();
        let owner = Uuid::new_v4();

        let err = repo.insert(post(owner, "")).await.unwrap_err();

        match err {
            RepoError::Validation(messages) => assert_eq!(messages, vec!["title is required"]),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(repo.find_by_user_id(owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_user_id_filters_owner() {
        let repo = InMemoryPostRepository::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        repo.insert(post(alice, "a1")).await.unwrap();
        repo.insert(post(bob, "b1")).await.unwrap();
        repo.insert(post(alice, "a2")).await.unwrap();

        let titles: Vec<_> = repo
            .find_by_user_id(alice)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();

        assert_eq!(titles, vec!["a1", "a2"]);
    }

    #[tokio::test]
    async fn test_update_missing_post_returns_none() {
        let repo = InMemoryPostRepository::new();
        let changes = PostChanges {
            title: Some("New".into()),
            content: None,
        };

        assert!(
            repo.find_by_id_and_update(Uuid::new_v4(), changes)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_update_validates_before_writing() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.insert(post(Uuid::new_v4(), "Keep")).await.unwrap();
        let changes = PostChanges {
            title: Some(String::new()),
            content: None,
        };

        let err = repo
            .find_by_id_and_update(saved.id, changes)
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Validation(_)));
        let stored = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Keep");
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let repo = InMemoryPostRepository::new();
        let owner = Uuid::new_v4();
        let keep = repo.insert(post(owner, "keep")).await.unwrap();
        let gone = repo.insert(post(owner, "gone")).await.unwrap();

        let removed = repo.find_by_id_and_delete(gone.id).await.unwrap();
        assert_eq!(removed.map(|p| p.id), Some(gone.id));

        assert!(repo.find_by_id_and_delete(gone.id).await.unwrap().is_none());
        assert!(repo.find_by_id(keep.id).await.unwrap().is_some());
    }
}
