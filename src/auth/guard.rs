//! Ownership checks
//!
//! Mutating routes load their target, then ask the guard whether the
//! principal owns it. Ids are compared in canonical form so that the same
//! account id spelled two ways still matches.

use super::principal::Principal;
use crate::core::models::{Comment, Post, Todo, User, canonical_id};
use crate::utils::error::{BoardError, Result};
use tracing::debug;

/// Outcome of an ownership check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied,
}

/// A record with a single owning account
pub trait Ownable {
    /// The owning account's id, in whatever form the record stores it
    fn owner_id(&self) -> String;
}

impl Ownable for Todo {
    fn owner_id(&self) -> String {
        self.owner.to_string()
    }
}

impl Ownable for Post {
    fn owner_id(&self) -> String {
        self.author.to_string()
    }
}

impl Ownable for Comment {
    fn owner_id(&self) -> String {
        self.author.to_string()
    }
}

/// An account owns itself
impl Ownable for User {
    fn owner_id(&self) -> String {
        self.id.to_string()
    }
}

/// Decide whether `principal` may act on `resource`
pub fn authorize<R: Ownable + ?Sized>(principal: &Principal, resource: &R) -> Decision {
    if canonical_id(&resource.owner_id()) == canonical_id(&principal.id().to_string()) {
        Decision::Allowed
    } else {
        Decision::Denied
    }
}

/// [`authorize`] as a `Result`, failing with `Forbidden`
pub fn ensure_owner<R: Ownable + ?Sized>(principal: &Principal, resource: &R) -> Result<()> {
    match authorize(principal, resource) {
        Decision::Allowed => Ok(()),
        Decision::Denied => {
            debug!("User {} denied on a record they do not own", principal.id());
            Err(BoardError::Forbidden)
        }
    }
}
