use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_post_tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub blog_post_id: i32,
    #[sea_orm(primary_key)]
    pub tag_id: i32,
    #[sea_orm(belongs_to, from = "blog_post_id", to = "id")]
    pub blog_post: Option<super::blog_post::Entity>,
    #[sea_orm(belongs_to, from = "tag_id", to = "id")]
    pub tag: Option<super::tag::Entity>,

    /// Position of the tag within the post's tag list.
    pub position: i32,
}

impl ActiveModelBehavior for ActiveModel {}
