use sea_orm::*;
use tracing::info;

use crate::entity::role;

/// Roles every deployment starts with, as `(name, role_type)`.
const DEFAULT_ROLES: &[(&str, &str)] = &[
    ("Public", role::PUBLIC_ROLE),
    ("Authenticated", "authenticated"),
];

/// Insert the default roles, leaving existing ones untouched.
pub async fn ensure_default_roles(db: &DatabaseConnection) -> Result<(), DbErr> {
    let mut roles_inserted = 0u32;
    for &(name, role_type) in DEFAULT_ROLES {
        let model = role::ActiveModel {
            name: Set(name.to_string()),
            role_type: Set(role_type.to_string()),
            ..Default::default()
        };

        let result = role::Entity::insert(model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(role::Column::RoleType)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await;

        match result {
            Ok(0) | Err(DbErr::RecordNotInserted) => {}
            Ok(_) => roles_inserted += 1,
            Err(e) => return Err(e),
        }
    }

    if roles_inserted > 0 {
        info!("Seeded {} new roles", roles_inserted);
    }

    Ok(())
}
