use thiserror::Error;

/// Result type for collection operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors surfaced by document-collection backends.
///
/// Implementations map their backend's failures into these variants;
/// the unique-value loop propagates them unchanged and never retries
/// after one.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("unique value already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}
