use crate::auth::AccountDirectory;
use crate::core::models::User;
use crate::utils::error::{BoardError, Result};
use async_trait::async_trait;
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, user};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Find user by ID
    pub async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        debug!("Finding user by ID: {}", user_id);

        let user_model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(BoardError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// Find user by email
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!("Finding user by email");

        let user_model = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(BoardError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// Create a new user
    ///
    /// A unique-constraint violation on email is reported as `Conflict`.
    pub async fn create_user(&self, user: &User) -> Result<User> {
        debug!("Creating user: {}", user.id);

        let active_model = user::Model::from_domain_user(user);

        entities::User::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => BoardError::conflict(&user.email),
                _ => BoardError::Database(e),
            })?;

        Ok(user.clone())
    }

    /// List all users, oldest first
    pub async fn list_users(&self) -> Result<Vec<User>> {
        debug!("Listing users");

        let models = entities::User::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(BoardError::Database)?;

        Ok(models.iter().map(|m| m.to_domain_user()).collect())
    }

    /// Delete a user; `false` when no row matched
    pub async fn delete_user(&self, user_id: Uuid) -> Result<bool> {
        debug!("Deleting user: {}", user_id);

        let result = entities::User::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(BoardError::Database)?;

        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl AccountDirectory for SeaOrmDatabase {
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        SeaOrmDatabase::find_user_by_id(self, id).await
    }
}
