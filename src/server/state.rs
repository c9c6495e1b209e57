//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::auth::{AccountDirectory, AuthSystem};
use crate::config::Config;
use crate::services::{CommentService, PostService, TodoService, UserService};
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything here is read-only after startup apart from the pooled database
/// connection inside the storage layer.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authentication system
    pub auth: Arc<AuthSystem>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
    pub users: UserService,
    pub todos: TodoService,
    pub posts: PostService,
    pub comments: CommentService,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, storage: StorageLayer) -> Result<Self> {
        let storage = Arc::new(storage);
        let directory: Arc<dyn AccountDirectory> = storage.database.clone();
        let auth = AuthSystem::new(&config.app.auth, directory)?;

        Ok(Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            users: UserService::new(storage.clone()),
            todos: TodoService::new(storage.clone()),
            posts: PostService::new(storage.clone()),
            comments: CommentService::new(storage.clone()),
            storage,
        })
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
