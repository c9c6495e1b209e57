//! Account registration, login and lookup

use super::record_id;
use crate::auth::password::{hash_password_blocking, verify_password_blocking};
use crate::auth::{AuthSystem, Principal, ensure_owner};
use crate::core::models::{LoginRequest, ResourceKind, User};
use crate::core::validation::validate_registration;
use crate::storage::StorageLayer;
use crate::utils::error::{BoardError, Result};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Account operations
#[derive(Debug, Clone)]
pub struct UserService {
    storage: Arc<StorageLayer>,
}

impl UserService {
    pub fn new(storage: Arc<StorageLayer>) -> Self {
        Self { storage }
    }

    /// Register a new account from a raw request body
    pub async fn register(&self, body: &Value) -> Result<User> {
        let registration = validate_registration(body)?;

        if self
            .storage
            .db()
            .find_user_by_email(&registration.email)
            .await?
            .is_some()
        {
            debug!("Registration refused for an email already in use");
            return Err(BoardError::conflict(registration.email));
        }

        let password_hash = hash_password_blocking(registration.password).await?;
        let user = User {
            id: Uuid::new_v4(),
            password_hash,
            email: registration.email,
            first_name: registration.first_name,
            last_name: registration.last_name,
            avatar: registration.avatar,
            date: registration.date.unwrap_or_else(Utc::now),
        };

        let user = self.storage.db().create_user(&user).await?;
        info!("Registered user: {}", user.id);
        Ok(user)
    }

    /// Check credentials and mint a token
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, auth: &AuthSystem, request: &LoginRequest) -> Result<String> {
        let Some(user) = self.storage.db().find_user_by_email(&request.email).await? else {
            debug!("Login failed: unknown email");
            return Err(BoardError::InvalidCredentials);
        };

        let matches =
            verify_password_blocking(request.password.clone(), user.password_hash.clone()).await?;
        if !matches {
            debug!("Login failed for user {}: wrong password", user.id);
            return Err(BoardError::InvalidCredentials);
        }

        let token = auth.issue_token(&user)?;
        info!("User logged in: {}", user.id);
        Ok(token)
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.storage.db().list_users().await
    }

    pub async fn get(&self, id: &str) -> Result<User> {
        let id = record_id(id, ResourceKind::User)?;
        self.storage
            .db()
            .find_user_by_id(id)
            .await?
            .ok_or(BoardError::NotFound(ResourceKind::User))
    }

    /// Delete an account; only the account itself may do this
    ///
    /// Records owned by the account are left in place.
    pub async fn delete(&self, principal: &Principal, id: &str) -> Result<()> {
        let user = self.get(id).await?;
        ensure_owner(principal, &user)?;

        if !self.storage.db().delete_user(user.id).await? {
            return Err(BoardError::NotFound(ResourceKind::User));
        }
        info!("Deleted user: {}", user.id);
        Ok(())
    }
}
