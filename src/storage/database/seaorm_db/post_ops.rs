use crate::core::models::{Post, ResourceKind};
use crate::utils::error::{BoardError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, post};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert a new post
    pub async fn create_post(&self, post: &Post) -> Result<Post> {
        debug!("Creating post {} for author {}", post.id, post.author);

        entities::Post::insert(post::Model::from_domain_post(post)?)
            .exec(&self.db)
            .await
            .map_err(BoardError::Database)?;

        Ok(post.clone())
    }

    /// List all posts, oldest first
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let models = entities::Post::find()
            .order_by_asc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(BoardError::Database)?;

        models.iter().map(|m| m.to_domain_post()).collect()
    }

    /// Find post by ID, comments included
    pub async fn find_post_by_id(&self, post_id: Uuid) -> Result<Option<Post>> {
        debug!("Finding post by ID: {}", post_id);

        let model = entities::Post::find_by_id(post_id)
            .one(&self.db)
            .await
            .map_err(BoardError::Database)?;

        model.map(|m| m.to_domain_post()).transpose()
    }

    /// Write the whole post document back, comments included
    ///
    /// Concurrent saves of the same post are last-write-wins.
    pub async fn save_post(&self, post: &Post) -> Result<Post> {
        debug!(
            "Saving post {} with {} comments",
            post.id,
            post.comments.len()
        );

        entities::Post::update(post::Model::from_domain_post(post)?)
            .exec(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => BoardError::not_found(ResourceKind::Post),
                e => BoardError::Database(e),
            })?;

        Ok(post.clone())
    }

    /// Delete a post with its comments; `false` when no row matched
    pub async fn delete_post(&self, post_id: Uuid) -> Result<bool> {
        debug!("Deleting post: {}", post_id);

        let result = entities::Post::delete_by_id(post_id)
            .exec(&self.db)
            .await
            .map_err(BoardError::Database)?;

        Ok(result.rows_affected > 0)
    }
}
