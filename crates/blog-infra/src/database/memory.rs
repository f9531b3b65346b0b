//! In-memory post store - used when no database is configured, and by tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::RepoError;
use blog_core::domain::{NewPost, Post, PostChanges};
use blog_core::ports::{BaseRepository, PostRepository};

/// In-memory post store backed by a `Vec` behind an async RwLock.
///
/// Keeps insertion order. Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
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
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() < before)
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        tracing::debug!(dropped = posts.len(), "Dropping all posts");
        posts.clear();
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        post.validate()?;
        let post = post.into_post();
        self.posts.write().await.push(post.clone());
        tracing::debug!(post_id = %post.id, "Post stored");
        Ok(post)
    }

    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<Post>, RepoError> {
        for post in &posts {
            post.validate()?;
        }
        let created: Vec<Post> = posts.into_iter().map(NewPost::into_post).collect();
        self.posts.write().await.extend(created.iter().cloned());
        tracing::debug!(count = created.len(), "Posts stored");
        Ok(created)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        changes.validate()?;
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        changes.apply(post);
        Ok(Some(post.clone()))
    }
}
