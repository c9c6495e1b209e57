//! Core data models for the board service
//!
//! This module defines the records served by the API and the sanitized value
//! objects the validators produce.

pub mod id;
pub mod post;
pub mod todo;
pub mod user;

pub use id::{canonical_id, parse_record_id};
pub use post::{Comment, CommentDraft, Post, PostDraft};
pub use todo::{Todo, TodoDraft, TodoStatus};
pub use user::{LoginRequest, LoginResponse, Registration, User};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of record a request can address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    User,
    Todo,
    Post,
    Comment,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::User => "User",
            ResourceKind::Todo => "Todo",
            ResourceKind::Post => "Post",
            ResourceKind::Comment => "Comment",
        };
        f.write_str(name)
    }
}
