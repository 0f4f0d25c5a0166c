use futures::future::try_join_all;
use tracing::{info, warn};

use super::content_type::{Action, ContentType};
use super::store::PermissionStore;
use crate::entity::role::PUBLIC_ROLE;
use crate::error::Result;

/// Read access opened to anonymous visitors on first run.
pub const PUBLIC_GRANTS: &[(ContentType, &[Action])] = &[
    (ContentType::Tag, &[Action::Find, Action::FindOne]),
    (ContentType::Author, &[Action::Find, Action::FindOne]),
    (ContentType::BlogPost, &[Action::Find, Action::FindOne]),
];

/// Grant every `(content type, action)` pair in `grants` to the public role.
///
/// A deployment without a public role is left untouched. Permission records
/// are created concurrently; the first failure fails the whole batch.
pub async fn set_public_permissions(
    store: &dyn PermissionStore,
    grants: &[(ContentType, &[Action])],
) -> Result<()> {
    let Some(role) = store.find_role_by_type(PUBLIC_ROLE).await? else {
        warn!("No public role found, skipping public permissions");
        return Ok(());
    };

    let role_id = role.id;
    let pending = grants.iter().flat_map(|&(content_type, actions)| {
        actions
            .iter()
            .map(move |&action| store.create_permission(content_type.action(action), role_id))
    });
    let created = try_join_all(pending).await?;

    info!(
        role_id,
        permissions = created.len(),
        "Granted public permissions"
    );
    Ok(())
}
