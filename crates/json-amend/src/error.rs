//! Error types for amend and convert operations.

use thiserror::Error;

use crate::kind::ValueKind;

/// Errors from object rebuild operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AmendError {
    /// The source value is not a JSON object.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(ValueKind),
}

/// Errors from typed conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The document root is null.
    #[error("document root is null")]
    NullDocument,
    /// Nesting exceeds the configured maximum depth.
    #[error("value nesting exceeds the maximum depth of {0}")]
    DepthExceeded(usize),
    /// Deserialization failure, propagated unchanged.
    #[error(transparent)]
    Deserialize(#[from] serde_json::Error),
}
