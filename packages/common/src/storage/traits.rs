use async_trait::async_trait;

use super::error::StorageError;
use super::hash::ContentHash;

/// Content-addressed storage for uploaded media files.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store bytes and return their content hash. Storing identical bytes twice
    /// yields the same hash and a single stored copy.
    async fn put(&self, data: &[u8]) -> Result<ContentHash, StorageError>;
}
