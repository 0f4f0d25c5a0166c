use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use super::DatabaseStore;
use crate::entity::{permission, role};
use crate::error::Result;
use crate::seed::store::{Permission, PermissionStore, Role};

#[async_trait]
impl PermissionStore for DatabaseStore {
    async fn find_role_by_type(&self, role_type: &str) -> Result<Option<Role>> {
        let found = role::Entity::find()
            .filter(role::Column::RoleType.eq(role_type))
            .one(&self.db)
            .await?;

        Ok(found.map(|r| Role { id: r.id }))
    }

    async fn create_permission(&self, action: String, role_id: i32) -> Result<Permission> {
        let model = permission::ActiveModel {
            action: Set(action),
            role_id: Set(role_id),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(Permission {
            action: model.action,
            role_id: model.role_id,
        })
    }
}
