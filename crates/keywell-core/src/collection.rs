use crate::document::Document;
use crate::error::Result;
use crate::value::FieldValue;
use async_trait::async_trait;

/// A read-only view of a document collection.
///
/// This is all the unique-value loop needs: it only ever probes for an
/// existing record, so it takes this trait rather than full
/// [`Collection`] access.
#[async_trait]
pub trait ReadCollection: Send + Sync + 'static {
    /// Finds at most one document whose `field` equals `value` exactly.
    ///
    /// Returns `None` when no document matches.
    async fn find_one(&self, field: &str, value: &FieldValue) -> Result<Option<Document>>;
}

/// A writable document collection.
#[async_trait]
pub trait Collection: ReadCollection {
    /// Inserts a new document.
    ///
    /// Collections that enforce a uniqueness constraint return
    /// [`StorageError::Conflict`] for a duplicate value; that constraint
    /// is the only hard guarantee against two writers settling on the
    /// same generated value between check and insert.
    ///
    /// [`StorageError::Conflict`]: crate::error::StorageError::Conflict
    async fn insert(&self, document: Document) -> Result<()>;
}
