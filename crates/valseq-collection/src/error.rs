//! Error types for collection operations

use thiserror::Error;

/// Errors that can occur during collection operations
///
/// Sequence operations are total over their input domain; the only
/// failures are a seedless fold over nothing and textual conversion.
#[derive(Error, Debug)]
pub enum SequenceError {
    /// `reduce`/`reduce_right` without a seed on an empty collection
    #[error("Cannot reduce an empty sequence without a seed")]
    EmptyWithoutSeed,

    /// Element serialization failed during textual conversion
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SequenceError {
    fn from(e: serde_json::Error) -> Self {
        SequenceError::Render(e.to_string())
    }
}

/// Result alias for collection operations
pub type Result<T> = std::result::Result<T, SequenceError>;
