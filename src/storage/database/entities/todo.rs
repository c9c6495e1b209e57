use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Todo database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub title: String,

    pub description: Option<String>,

    /// One of `Incomplete`, `Working`, `Complete`
    pub status: String,

    /// Owning user ID
    pub owner: Uuid,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain todo model
    ///
    /// A stored status outside the known set is an internal error.
    pub fn to_domain_todo(&self) -> crate::utils::error::Result<crate::core::models::Todo> {
        let status = self
            .status
            .parse::<crate::core::models::TodoStatus>()
            .map_err(|e| {
                warn!("Todo {} has a corrupt status column: {}", self.id, e);
                crate::utils::error::BoardError::internal(e)
            })?;

        Ok(crate::core::models::Todo {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            status,
            owner: self.owner,
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        })
    }

    /// Convert domain todo model to SeaORM active model
    pub fn from_domain_todo(todo: &crate::core::models::Todo) -> ActiveModel {
        ActiveModel {
            id: Set(todo.id),
            title: Set(todo.title.clone()),
            description: Set(todo.description.clone()),
            status: Set(todo.status.to_string()),
            owner: Set(todo.owner),
            created_at: Set(todo.created_at.into()),
            updated_at: Set(todo.updated_at.into()),
        }
    }
}
