use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewPost, Post, PostChanges};
use crate::error::RepoError;

/// Generic repository trait defining the entity-agnostic store operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID. Absence is not an error.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Every stored entity.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Number of stored entities.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Delete an entity by its ID.
    ///
    /// Returns `false` when nothing was stored under `id`; deleting twice is fine.
    async fn delete(&self, id: ID) -> Result<bool, RepoError>;

    /// Remove every entity. Only test teardown should call this.
    async fn drop_all(&self) -> Result<(), RepoError>;
}

/// Post store.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Validate and store a new post, assigning its id and default date.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Bulk create for seeding. Nothing is written if any input is invalid.
    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<Post>, RepoError>;

    /// Apply a partial update. `None` if the post does not exist.
    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Option<Post>, RepoError>;
}
