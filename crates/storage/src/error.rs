// Path: crates/storage/src/error.rs
use thiserror::Error;

/// Errors surfaced by the [`crate::NodeStore`] implementations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("backing database error: {0}")]
    Backend(String),

    #[error("node {0} referenced but not present in the store")]
    MissingNode(String),

    #[error("corrupt node record at key {0}")]
    Corrupt(String),
}

impl From<redb::Error> for StorageError {
    fn from(err: redb::Error) -> Self {
        StorageError::Backend(err.to_string())
    }
}

impl From<redb::DatabaseError> for StorageError {
    fn from(err: redb::DatabaseError) -> Self {
        StorageError::Backend(err.to_string())
    }
}

impl From<redb::TransactionError> for StorageError {
    fn from(err: redb::TransactionError) -> Self {
        StorageError::Backend(err.to_string())
    }
}

impl From<redb::TableError> for StorageError {
    fn from(err: redb::TableError) -> Self {
        StorageError::Backend(err.to_string())
    }
}

impl From<redb::StorageError> for StorageError {
    fn from(err: redb::StorageError) -> Self {
        StorageError::Backend(err.to_string())
    }
}

impl From<redb::CommitError> for StorageError {
    fn from(err: redb::CommitError) -> Self {
        StorageError::Backend(err.to_string())
    }
}
