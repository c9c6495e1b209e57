//! Todo operations

use super::record_id;
use crate::auth::{Principal, ensure_owner};
use crate::core::models::{ResourceKind, Todo};
use crate::core::validation::validate_todo;
use crate::storage::StorageLayer;
use crate::utils::error::{BoardError, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone)]
pub struct TodoService {
    storage: Arc<StorageLayer>,
}

impl TodoService {
    pub fn new(storage: Arc<StorageLayer>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, principal: &Principal, body: Value) -> Result<Todo> {
        let draft = validate_todo(body, &principal.id().to_string())?;
        let todo = self
            .storage
            .db()
            .create_todo(&Todo::new(principal.id(), draft))
            .await?;
        info!("Created todo {} for user {}", todo.id, todo.owner);
        Ok(todo)
    }

    /// Every todo, regardless of owner
    pub async fn list(&self) -> Result<Vec<Todo>> {
        self.storage.db().list_todos().await
    }

    pub async fn get(&self, id: &str) -> Result<Todo> {
        let id = record_id(id, ResourceKind::Todo)?;
        self.storage
            .db()
            .find_todo_by_id(id)
            .await?
            .ok_or(BoardError::NotFound(ResourceKind::Todo))
    }

    /// Full update; ownership is checked before the body is validated
    pub async fn update(&self, principal: &Principal, id: &str, body: Value) -> Result<Todo> {
        let mut todo = self.get(id).await?;
        ensure_owner(principal, &todo)?;

        let draft = validate_todo(body, &principal.id().to_string())?;
        todo.apply(draft);
        self.storage.db().update_todo(&todo).await
    }

    pub async fn complete(&self, principal: &Principal, id: &str) -> Result<Todo> {
        let mut todo = self.get(id).await?;
        ensure_owner(principal, &todo)?;

        todo.complete();
        self.storage.db().update_todo(&todo).await
    }

    pub async fn delete(&self, principal: &Principal, id: &str) -> Result<()> {
        let todo = self.get(id).await?;
        ensure_owner(principal, &todo)?;

        if !self.storage.db().delete_todo(todo.id).await? {
            return Err(BoardError::NotFound(ResourceKind::Todo));
        }
        info!("Deleted todo: {}", todo.id);
        Ok(())
    }
}
