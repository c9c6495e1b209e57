//! Principal resolution
//!
//! A verified token only proves who the account *was*; the resolver checks
//! that the account still exists before the request may proceed.

use crate::core::models::{User, parse_record_id};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// The account a request acts as, resolved once per request
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    user: User,
}

impl Principal {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn id(&self) -> Uuid {
        self.user.id
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }
}

/// Account lookup used by the resolver
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>>;
}

/// Maps a token subject to a live account
#[derive(Clone)]
pub struct PrincipalResolver {
    directory: Arc<dyn AccountDirectory>,
}

impl PrincipalResolver {
    pub fn new(directory: Arc<dyn AccountDirectory>) -> Self {
        Self { directory }
    }

    /// `Ok(None)` when no account matches the subject; storage failures are errors
    pub async fn resolve(&self, subject_id: &str) -> Result<Option<Principal>> {
        let Some(id) = parse_record_id(subject_id) else {
            debug!("Token subject is not a record id");
            return Ok(None);
        };

        let user = self.directory.find_user_by_id(id).await?;
        if user.is_none() {
            debug!("Token subject {} no longer exists", id);
        }
        Ok(user.map(Principal::new))
    }
}
