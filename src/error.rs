//! Error taxonomy for store and storage operations.
//!
//! `StoreError` is the internal typed error; the FFI layer converts it into
//! the serializable [`AppResponse`](crate::app_response::AppResponse)
//! envelope before crossing the boundary.

use redb::{CommitError, DatabaseError, StorageError, TableError, TransactionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced module has no catalog entry or no progress record.
    #[error("not found: {0}")]
    NotFound(String),

    /// A progress record already exists for this module.
    #[error("duplicate record: {0}")]
    DuplicateRecord(String),

    /// A caller-supplied value is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The persisted progress blob could not be parsed. Recovered inside
    /// `ProgressStore::load`; callers of `load` never see it.
    #[error("stored progress data is corrupt: {0}")]
    Corrupt(String),

    /// The storage engine failed.
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<DatabaseError> for StoreError {
    fn from(err: DatabaseError) -> Self {
        StoreError::Storage(format!("failed to open database: {err}"))
    }
}

impl From<TransactionError> for StoreError {
    fn from(err: TransactionError) -> Self {
        StoreError::Storage(format!("transaction error: {err:?}"))
    }
}

impl From<TableError> for StoreError {
    fn from(err: TableError) -> Self {
        StoreError::Storage(format!("table operation error: {err:?}"))
    }
}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Corrupted(msg) => StoreError::Corrupt(msg),
            other => StoreError::Storage(format!("{other:?}")),
        }
    }
}

impl From<CommitError> for StoreError {
    fn from(err: CommitError) -> Self {
        StoreError::Storage(format!("commit error: {err:?}"))
    }
}
