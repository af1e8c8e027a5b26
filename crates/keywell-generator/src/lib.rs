//! Candidate generators for unique document keys.
//!
//! A [`KeyGenerator`] proposes candidate field values; probing the
//! collection for collisions belongs to the hook crate. Implementations
//! here are pure value sources and never touch storage.

pub mod error;
pub mod random;
pub mod seq;

pub use error::GeneratorError;
pub use random::{AlphanumericGenerator, UuidGenerator};
pub use seq::SeqGenerator;

use keywell_core::{Document, FieldValue};

/// Trait for proposing candidate key values.
///
/// A generator may derive the candidate from other fields of the
/// document, but must not query storage. Uniqueness is the caller's
/// problem. Candidates should come from a domain large enough for the
/// collection they target; a nearly exhausted domain turns the caller's
/// collision retries into a spin.
pub trait KeyGenerator: Send + Sync + 'static {
    /// The candidate type, converted into a [`FieldValue`] by the caller.
    type Output: Into<FieldValue>;

    /// Proposes the next candidate value for `document`.
    ///
    /// Errors propagate to the caller unchanged; a failed generation is
    /// never retried.
    fn generate(&self, document: &Document) -> Result<Self::Output, GeneratorError>;
}

/// Wraps a plain function as a [`KeyGenerator`].
///
/// ```
/// use keywell_core::Document;
/// use keywell_generator::{from_fn, GeneratorError, KeyGenerator};
///
/// let generator = from_fn(|doc: &Document| {
///     let title = doc
///         .get("title")
///         .and_then(|v| v.as_str())
///         .ok_or_else(|| GeneratorError::MissingField("title".to_string()))?;
///     Ok(format!("{}-1", title))
/// });
///
/// let doc = Document::new().with("title", "hello");
/// assert_eq!(generator.generate(&doc).unwrap(), "hello-1");
/// ```
pub fn from_fn<F, V>(f: F) -> FnGenerator<F>
where
    F: Fn(&Document) -> Result<V, GeneratorError> + Send + Sync + 'static,
    V: Into<FieldValue>,
{
    FnGenerator { f }
}

/// A [`KeyGenerator`] backed by a plain function. Built with [`from_fn`].
#[derive(Clone)]
pub struct FnGenerator<F> {
    f: F,
}

impl<F> std::fmt::Debug for FnGenerator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnGenerator").finish_non_exhaustive()
    }
}

impl<F, V> KeyGenerator for FnGenerator<F>
where
    F: Fn(&Document) -> Result<V, GeneratorError> + Send + Sync + 'static,
    V: Into<FieldValue>,
{
    type Output = V;

    fn generate(&self, document: &Document) -> Result<V, GeneratorError> {
        (self.f)(document)
    }
}
