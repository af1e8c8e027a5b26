//! Core types and traits for the keywell unique-key toolkit.
//!
//! This crate provides the document model and the backing-store traits
//! shared by the generator and hook crates.

pub mod collection;
pub mod document;
pub mod error;
pub mod value;

pub use collection::{Collection, ReadCollection};
pub use document::{Document, ID_FIELD};
pub use error::StorageError;
pub use value::FieldValue;
