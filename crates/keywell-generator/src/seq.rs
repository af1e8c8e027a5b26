use crate::error::GeneratorError;
use crate::KeyGenerator;
use keywell_core::Document;
use std::sync::atomic::{AtomicU64, Ordering};

/// A sequential candidate generator: a fixed prefix plus a zero-padded
/// atomic counter, producing `doc000000`, `doc000001`, ...
///
/// Within one process the counter alone guarantees fresh candidates.
/// Across processes, give each instance its own prefix or counter range;
/// otherwise the collision probe is what saves you, one retry per
/// already-taken value.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
            prefix: self.prefix.clone(),
        }
    }
}

impl SeqGenerator {
    /// Creates a generator with the given prefix, counting from zero.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Creates a generator counting from `offset`.
    ///
    /// Useful for resuming from a known state or for handing disjoint
    /// counter ranges to different instances.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl KeyGenerator for SeqGenerator {
    type Output = String;

    fn generate(&self, _document: &Document) -> Result<String, GeneratorError> {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{}{:06}", self.prefix, count))
    }
}
