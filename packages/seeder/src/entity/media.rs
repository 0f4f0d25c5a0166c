use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "media")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Logical name: the original filename without its extension.
    pub name: String,
    /// Original upload filename.
    pub file_name: String,
    pub alternative_text: Option<String>,
    pub caption: Option<String>,
    pub mime: String,
    pub size: i64,

    /// SHA-256 content hash of the stored blob.
    pub hash: String,

    #[sea_orm(has_many)]
    pub authors: HasMany<super::author::Entity>,

    #[sea_orm(has_many)]
    pub blog_posts: HasMany<super::blog_post::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
