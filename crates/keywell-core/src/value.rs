use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A document field value that supports exact-match querying.
///
/// Variants are limited to types with total equality so collections can
/// compare and hash them; floats stay out. The untagged serde
/// representation keeps stored documents plain JSON scalars.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A string.
    Str(String),
}

impl FieldValue {
    /// Whether the value reads as "nothing set yet": an explicit null or
    /// an empty string. Zero and `false` are real values.
    ///
    /// The overwrite warning uses this to decide if a field already
    /// carried a value worth mentioning.
    pub fn is_unset(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Str(s) => s.is_empty(),
            FieldValue::Bool(_) | FieldValue::Int(_) => false,
        }
    }

    /// Returns the string contents for `Str` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl Display for FieldValue {
    /// Renders the serialized form: `"abc"`, `42`, `true`, `null`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(i64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}
