use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub slug: String,
    pub title_en: String,
    pub title_fr: String,
    #[sea_orm(column_type = "Text")]
    pub excerpt_en: String,
    #[sea_orm(column_type = "Text")]
    pub excerpt_fr: String,
    #[sea_orm(column_type = "Text")]
    pub content_en: String, // in Markdown
    #[sea_orm(column_type = "Text")]
    pub content_fr: String,

    /// External video identifier (e.g. a YouTube id).
    pub video_id: Option<String>,

    pub cover_image_id: Option<i32>,
    #[sea_orm(belongs_to, from = "cover_image_id", to = "id")]
    pub cover_image: Option<super::media::Entity>,

    pub author_id: Option<i32>,
    #[sea_orm(belongs_to, from = "author_id", to = "id")]
    pub author: Option<super::author::Entity>,

    #[sea_orm(has_many, via = "blog_post_tag")]
    pub tags: HasMany<super::tag::Entity>,

    pub published_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
