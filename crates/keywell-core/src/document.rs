use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The conventional primary-key field, and the default target for
/// unique-key assignment.
///
/// Document models pre-assign this field on construction, so replacing
/// its value is routine and never warned about.
pub const ID_FIELD: &str = "_id";

/// An in-memory record headed for a document collection.
///
/// Fields are addressed by plain string keys. The `is_new` flag
/// distinguishes a document awaiting its first save from one hydrated
/// out of storage; it is runtime state, not data, so serde skips it and
/// a deserialized document always reads as already persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(flatten)]
    fields: BTreeMap<String, FieldValue>,
    #[serde(skip)]
    is_new: bool,
}

impl Document {
    /// Creates an empty document marked as newly created.
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
            is_new: true,
        }
    }

    /// Returns the value of a field, if set.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Sets a field, returning the previous value if there was one.
    pub fn set(
        &mut self,
        field: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(field.into(), value.into())
    }

    /// Sets a field and returns the document, for fluent construction.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Removes a field, returning its value if it was set.
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.fields.remove(field)
    }

    /// Whether this document has not yet been persisted.
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Marks the document as persisted.
    ///
    /// Hosts call this after a successful save; pre-create hooks skip
    /// documents that are no longer new.
    pub fn mark_persisted(&mut self) {
        self.is_new = false;
    }

    /// Number of fields set on the document.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no fields set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
