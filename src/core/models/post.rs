//! Post and comment models
//!
//! Comments live inside their post; they are addressed by post id first and
//! then looked up by comment id within that post's collection.

use super::id::canonical_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post record with its embedded comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub author: Uuid,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment embedded in a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub text: String,
    pub author: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Validated post fields
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
}

/// Validated comment fields
#[derive(Debug, Clone, PartialEq)]
pub struct CommentDraft {
    pub text: String,
}

impl Post {
    pub fn new(author: Uuid, draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            author,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.touch();
    }

    /// Find a comment by id; the id may be in any accepted textual form
    pub fn comment(&self, comment_id: &str) -> Option<&Comment> {
        let wanted = canonical_id(comment_id);
        self.comments
            .iter()
            .find(|c| canonical_id(&c.id.to_string()) == wanted)
    }

    pub fn comment_mut(&mut self, comment_id: &str) -> Option<&mut Comment> {
        let wanted = canonical_id(comment_id);
        self.comments
            .iter_mut()
            .find(|c| canonical_id(&c.id.to_string()) == wanted)
    }

    /// Append a comment and return its id
    pub fn add_comment(&mut self, author: Uuid, draft: CommentDraft) -> Uuid {
        let comment = Comment {
            id: Uuid::new_v4(),
            text: draft.text,
            author,
            created_at: Utc::now(),
        };
        let id = comment.id;
        self.comments.push(comment);
        self.touch();
        id
    }

    /// Remove a comment, keeping the order of the rest
    pub fn remove_comment(&mut self, comment_id: &str) -> Option<Comment> {
        let wanted = canonical_id(comment_id);
        let index = self
            .comments
            .iter()
            .position(|c| canonical_id(&c.id.to_string()) == wanted)?;
        let removed = self.comments.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
