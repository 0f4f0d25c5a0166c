use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Persistent key/value settings, namespaced by type and environment.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "core_store")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub store_type: String,
    #[sea_orm(primary_key)]
    pub environment: String,
    #[sea_orm(primary_key)]
    pub name: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub value: Json,

    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
