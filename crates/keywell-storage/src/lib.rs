//! Collection implementations for keywell.
//!
//! In-memory only. Database-backed collections live with their hosts,
//! behind the `keywell-core` collection traits.

pub mod memory;

pub use memory::InMemoryCollection;
