use async_trait::async_trait;
use dashmap::DashMap;
use keywell_core::collection::{Collection, ReadCollection};
use keywell_core::error::Result;
use keywell_core::{Document, FieldValue, StorageError};
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory implementation of the collection traits using DashMap.
///
/// Documents are keyed by an internal insertion number; `find_one` scans
/// in insertion order, so the oldest match wins when several documents
/// carry the same value. An optional unique index makes `insert` reject
/// duplicates the way a database uniqueness constraint would.
#[derive(Debug)]
pub struct InMemoryCollection {
    documents: DashMap<u64, Document>,
    next_seq: AtomicU64,
    unique_field: Option<String>,
}

impl InMemoryCollection {
    /// Creates an empty collection with no uniqueness constraint.
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
            next_seq: AtomicU64::new(0),
            unique_field: None,
        }
    }

    /// Creates an empty collection that rejects inserts whose `field`
    /// value is already present, mirroring a database unique index.
    pub fn with_unique_field(field: impl Into<String>) -> Self {
        Self {
            documents: DashMap::new(),
            next_seq: AtomicU64::new(0),
            unique_field: Some(field.into()),
        }
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the collection holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Scans documents in insertion order for the first exact match.
    /// Sequence numbers are dense (nothing is ever removed), so walking
    /// `0..next_seq` visits every document oldest-first.
    fn scan(&self, field: &str, value: &FieldValue) -> Option<Document> {
        let upper = self.next_seq.load(Ordering::SeqCst);
        (0..upper).find_map(|seq| {
            self.documents.get(&seq).and_then(|entry| {
                (entry.value().get(field) == Some(value)).then(|| entry.value().clone())
            })
        })
    }
}

impl Default for InMemoryCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadCollection for InMemoryCollection {
    async fn find_one(&self, field: &str, value: &FieldValue) -> Result<Option<Document>> {
        Ok(self.scan(field, value))
    }
}

#[async_trait]
impl Collection for InMemoryCollection {
    async fn insert(&self, document: Document) -> Result<()> {
        // Check-and-insert: reject a duplicate indexed value. Not atomic,
        // like any check that runs separately from the write.
        if let Some(field) = &self.unique_field {
            if let Some(value) = document.get(field) {
                if self.scan(field, value).is_some() {
                    return Err(StorageError::Conflict(format!("{field}={value}")));
                }
            }
        }

        // Anything read back out of the store is a persisted document.
        let mut document = document;
        document.mark_persisted();

        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.documents.insert(seq, document);
        Ok(())
    }
}
