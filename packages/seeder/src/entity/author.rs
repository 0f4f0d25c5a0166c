use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "author")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub bio_en: String,
    #[sea_orm(column_type = "Text")]
    pub bio_fr: String,

    pub avatar_id: Option<i32>,
    #[sea_orm(belongs_to, from = "avatar_id", to = "id")]
    pub avatar: Option<super::media::Entity>,

    #[sea_orm(has_many)]
    pub blog_posts: HasMany<super::blog_post::Entity>,

    pub published_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
