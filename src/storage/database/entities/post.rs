use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Post database model
///
/// Comments are stored inline as a JSON array so a post is read and written
/// as one document.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub title: String,

    pub description: String,

    /// Authoring user ID
    pub author: Uuid,

    /// Embedded comments
    pub comments: Json,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain post model
    pub fn to_domain_post(&self) -> crate::utils::error::Result<crate::core::models::Post> {
        Ok(crate::core::models::Post {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            author: self.author,
            comments: serde_json::from_value(self.comments.clone())?,
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        })
    }

    /// Convert domain post model to SeaORM active model
    pub fn from_domain_post(
        post: &crate::core::models::Post,
    ) -> crate::utils::error::Result<ActiveModel> {
        Ok(ActiveModel {
            id: Set(post.id),
            title: Set(post.title.clone()),
            description: Set(post.description.clone()),
            author: Set(post.author),
            comments: Set(serde_json::to_value(&post.comments)?),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        })
    }
}
