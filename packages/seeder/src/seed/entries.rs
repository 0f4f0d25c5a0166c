use tracing::{debug, error};

use super::store::{ContentStore, Document, NewEntry, Status};

/// Create and publish one entry.
///
/// A failure is logged and reported as `None`; callers carry on with the rest
/// of their batch.
pub async fn create_entry(store: &dyn ContentStore, entry: NewEntry) -> Option<Document> {
    let content_type = entry.content_type();
    match store.create(&entry, Status::Published).await {
        Ok(document) => {
            debug!(
                content_type = content_type.uid(),
                id = document.id,
                label = entry.label(),
                "Created entry"
            );
            Some(document)
        }
        Err(e) => {
            error!(
                content_type = content_type.uid(),
                label = entry.label(),
                error = %e,
                "Could not create entry"
            );
            None
        }
    }
}
