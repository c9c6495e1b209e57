//! Comment operations
//!
//! Comments are reached through their post. Every mutation rewrites the whole
//! post document and returns it.

use super::posts::PostService;
use crate::auth::{Principal, ensure_owner};
use crate::core::models::{Comment, Post, ResourceKind};
use crate::core::validation::validate_comment;
use crate::storage::StorageLayer;
use crate::utils::error::{BoardError, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct CommentService {
    storage: Arc<StorageLayer>,
    posts: PostService,
}

impl CommentService {
    pub fn new(storage: Arc<StorageLayer>) -> Self {
        Self {
            posts: PostService::new(storage.clone()),
            storage,
        }
    }

    /// Append a comment; the post must exist before the body is looked at
    pub async fn create(&self, principal: &Principal, post_id: &str, body: Value) -> Result<Post> {
        let mut post = self.posts.get(post_id).await?;

        let draft = validate_comment(body, &principal.id().to_string())?;
        let comment_id = post.add_comment(principal.id(), draft);

        let post = self.storage.db().save_post(&post).await?;
        info!("Added comment {} to post {}", comment_id, post.id);
        Ok(post)
    }

    pub async fn list(&self, post_id: &str) -> Result<Vec<Comment>> {
        Ok(self.posts.get(post_id).await?.comments)
    }

    pub async fn get(&self, post_id: &str, comment_id: &str) -> Result<Comment> {
        let post = self.posts.get(post_id).await?;
        post.comment(comment_id)
            .cloned()
            .ok_or(BoardError::NotFound(ResourceKind::Comment))
    }

    /// Replace a comment's text
    pub async fn update(
        &self,
        principal: &Principal,
        post_id: &str,
        comment_id: &str,
        body: Value,
    ) -> Result<Post> {
        let mut post = self.posts.get(post_id).await?;
        let comment = post
            .comment_mut(comment_id)
            .ok_or(BoardError::NotFound(ResourceKind::Comment))?;
        ensure_owner(principal, &*comment)?;

        let draft = validate_comment(body, &principal.id().to_string())?;
        comment.text = draft.text;
        post.touch();

        self.storage.db().save_post(&post).await
    }

    pub async fn delete(&self, principal: &Principal, post_id: &str, comment_id: &str) -> Result<Post> {
        let mut post = self.posts.get(post_id).await?;
        let comment = post
            .comment(comment_id)
            .ok_or(BoardError::NotFound(ResourceKind::Comment))?;
        ensure_owner(principal, comment)?;

        post.remove_comment(comment_id);
        let post = self.storage.db().save_post(&post).await?;
        info!("Removed comment {} from post {}", comment_id, post.id);
        Ok(post)
    }
}
