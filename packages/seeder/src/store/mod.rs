//! PostgreSQL-backed implementation of the seed store traits.

mod content;
mod media;
mod permission;
mod state;

use std::sync::Arc;

use common::storage::BlobStore;
use sea_orm::DatabaseConnection;

/// Stores seeded content in the database and media bytes in a [`BlobStore`].
#[derive(Clone)]
pub struct DatabaseStore {
    db: DatabaseConnection,
    blobs: Arc<dyn BlobStore>,
}

impl DatabaseStore {
    pub fn new(db: DatabaseConnection, blobs: Arc<dyn BlobStore>) -> Self {
        Self { db, blobs }
    }
}
