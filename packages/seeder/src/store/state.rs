use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};
use serde_json::Value;

use super::DatabaseStore;
use crate::entity::core_store;
use crate::error::Result;
use crate::seed::store::{StateKey, StateStore};

#[async_trait]
impl StateStore for DatabaseStore {
    async fn get(&self, key: &StateKey) -> Result<Option<Value>> {
        let record = core_store::Entity::find()
            .filter(core_store::Column::StoreType.eq(&key.store_type))
            .filter(core_store::Column::Environment.eq(&key.environment))
            .filter(core_store::Column::Name.eq(&key.name))
            .one(&self.db)
            .await?;

        Ok(record.map(|r| r.value))
    }

    async fn set(&self, key: &StateKey, value: Value) -> Result<()> {
        let model = core_store::ActiveModel {
            store_type: Set(key.store_type.clone()),
            environment: Set(key.environment.clone()),
            name: Set(key.name.clone()),
            value: Set(value),
            updated_at: Set(chrono::Utc::now()),
        };

        core_store::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    core_store::Column::StoreType,
                    core_store::Column::Environment,
                    core_store::Column::Name,
                ])
                .update_columns([core_store::Column::Value, core_store::Column::UpdatedAt])
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }
}
