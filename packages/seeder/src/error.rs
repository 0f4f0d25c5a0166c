use common::storage::StorageError;
use sea_orm::DbErr;
use thiserror::Error;

/// Errors raised by the seed workflow and the stores behind it.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Db(#[from] DbErr),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed data: {0}")]
    Data(#[from] serde_json::Error),

    /// A store rejected the operation for a reason of its own.
    #[error("{0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, SeedError>;
