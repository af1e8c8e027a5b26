use thiserror::Error;

/// Errors returned by key generators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// A document-derived generator needed a field the document lacks.
    #[error("generator requires document field '{0}'")]
    MissingField(String),
    /// Catch-all for custom generator failures.
    #[error("generator failed: {0}")]
    Failed(String),
}
