//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use uuid::Uuid;

use blog_core::RepoError;
use blog_core::domain::{NewPost, Post, PostChanges};
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        post.validate()?;

        let active: post::ActiveModel = post.into_post().into();
        let model = active.insert(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(post_id = %model.id, "Post inserted");

        Ok(model.into())
    }

    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<Post>, RepoError> {
        for post in &posts {
            post.validate()?;
        }
        let created: Vec<Post> = posts.into_iter().map(NewPost::into_post).collect();
        if created.is_empty() {
            return Ok(created);
        }

        let models = created.iter().cloned().map(post::ActiveModel::from);
        PostEntity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        tracing::debug!(count = created.len(), "Posts inserted");

        Ok(created)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        changes.validate()?;

        let Some(model) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };
        if changes.is_empty() {
            return Ok(Some(model.into()));
        }

        let mut active = model.into_active_model();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }

        let model = active.update(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(post_id = %id, "Post updated");

        Ok(Some(model.into()))
    }
}
