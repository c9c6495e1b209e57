//! Post operations

use super::record_id;
use crate::auth::{Principal, ensure_owner};
use crate::core::models::{Post, ResourceKind};
use crate::core::validation::validate_post;
use crate::storage::StorageLayer;
use crate::utils::error::{BoardError, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct PostService {
    storage: Arc<StorageLayer>,
}

impl PostService {
    pub fn new(storage: Arc<StorageLayer>) -> Self {
        Self { storage }
    }

    /// Create a post; any `comments` in the body are validated but not kept
    pub async fn create(&self, principal: &Principal, body: Value) -> Result<Post> {
        let draft = validate_post(body, &principal.id().to_string())?;
        let post = self
            .storage
            .db()
            .create_post(&Post::new(principal.id(), draft))
            .await?;
        info!("Created post {} for user {}", post.id, post.author);
        Ok(post)
    }

    pub async fn list(&self) -> Result<Vec<Post>> {
        self.storage.db().list_posts().await
    }

    pub async fn get(&self, id: &str) -> Result<Post> {
        let id = record_id(id, ResourceKind::Post)?;
        self.storage
            .db()
            .find_post_by_id(id)
            .await?
            .ok_or(BoardError::NotFound(ResourceKind::Post))
    }

    /// Replace title and description; comments are untouched
    pub async fn update(&self, principal: &Principal, id: &str, body: Value) -> Result<Post> {
        let mut post = self.get(id).await?;
        ensure_owner(principal, &post)?;

        let draft = validate_post(body, &principal.id().to_string())?;
        post.apply(draft);
        self.storage.db().save_post(&post).await
    }

    pub async fn delete(&self, principal: &Principal, id: &str) -> Result<()> {
        let post = self.get(id).await?;
        ensure_owner(principal, &post)?;

        if !self.storage.db().delete_post(post.id).await? {
            return Err(BoardError::NotFound(ResourceKind::Post));
        }
        info!("Deleted post: {}", post.id);
        Ok(())
    }
}
