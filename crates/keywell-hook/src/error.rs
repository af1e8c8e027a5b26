use keywell_core::StorageError;
use keywell_generator::GeneratorError;
use thiserror::Error;

/// Result type for unique-key operations.
pub type Result<T> = std::result::Result<T, UniqueKeyError>;

/// Errors surfaced while generating or assigning a unique key.
///
/// A collision is not an error, the loop retries those silently. Both
/// wrapped failures abort the current document's creation unchanged.
#[derive(Debug, Clone, Error)]
pub enum UniqueKeyError {
    #[error("invalid field name: {0}")]
    InvalidFieldName(String),
    #[error("generator error: {0}")]
    Generator(#[from] GeneratorError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
