use crate::core::models::{ResourceKind, Todo};
use crate::utils::error::{BoardError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, todo};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert a new todo
    pub async fn create_todo(&self, todo: &Todo) -> Result<Todo> {
        debug!("Creating todo {} for owner {}", todo.id, todo.owner);

        entities::Todo::insert(todo::Model::from_domain_todo(todo))
            .exec(&self.db)
            .await
            .map_err(BoardError::Database)?;

        Ok(todo.clone())
    }

    /// List all todos, oldest first
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let models = entities::Todo::find()
            .order_by_asc(todo::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(BoardError::Database)?;

        models.iter().map(|m| m.to_domain_todo()).collect()
    }

    /// Find todo by ID
    pub async fn find_todo_by_id(&self, todo_id: Uuid) -> Result<Option<Todo>> {
        debug!("Finding todo by ID: {}", todo_id);

        let model = entities::Todo::find_by_id(todo_id)
            .one(&self.db)
            .await
            .map_err(BoardError::Database)?;

        model.map(|m| m.to_domain_todo()).transpose()
    }

    /// Persist every field of an existing todo
    pub async fn update_todo(&self, todo: &Todo) -> Result<Todo> {
        debug!("Updating todo: {}", todo.id);

        entities::Todo::update(todo::Model::from_domain_todo(todo))
            .exec(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => BoardError::not_found(ResourceKind::Todo),
                e => BoardError::Database(e),
            })?;

        Ok(todo.clone())
    }

    /// Delete a todo; `false` when no row matched
    pub async fn delete_todo(&self, todo_id: Uuid) -> Result<bool> {
        debug!("Deleting todo: {}", todo_id);

        let result = entities::Todo::delete_by_id(todo_id)
            .exec(&self.db)
            .await
            .map_err(BoardError::Database)?;

        Ok(result.rows_affected > 0)
    }
}
