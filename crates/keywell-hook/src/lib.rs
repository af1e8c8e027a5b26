//! Unique-key assignment for new documents.
//!
//! [`generate_unique_value`] retries a caller-supplied generator until
//! the backing collection holds no record with the candidate value;
//! [`UniqueKey`] packages that loop as a pre-create hook for host
//! document-modeling frameworks to run before a document's first save.

pub mod error;
pub mod hook;
pub mod unique;

pub use error::UniqueKeyError;
pub use hook::{CreateHook, UniqueKey};
pub use unique::generate_unique_value;
