//! Services module
//!
//! Resource services hold the business rules for each record type: load the
//! target, consult the ownership guard, validate the body, then persist.
//! Handlers stay thin adapters over these.

pub mod comments;
pub mod posts;
pub mod todos;
pub mod users;

pub use comments::CommentService;
pub use posts::PostService;
pub use todos::TodoService;
pub use users::UserService;

use crate::core::models::{ResourceKind, parse_record_id};
use crate::utils::error::{BoardError, Result};
use uuid::Uuid;

/// Parse a path id, treating anything unparseable as a missing record
pub(crate) fn record_id(raw: &str, kind: ResourceKind) -> Result<Uuid> {
    parse_record_id(raw).ok_or(BoardError::NotFound(kind))
}
