//! Error handling for the analytics engine
//!
//! The engine performs no I/O, so the taxonomy is deliberately small: the
//! only fatal error is an unrecognized category tag handed to the
//! normalizer. A missing sibling-domain snapshot is not an error; the
//! rules that would consume it are simply skipped.

use shared::UnknownCategory;
use thiserror::Error;

/// Analytics engine error types
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The category tag from the API layer is not one of the 8 recognized
    /// values. Fatal to the single normalize call only; the caller treats
    /// the category as empty and continues.
    #[error("validation error: {0}")]
    Validation(#[from] UnknownCategory),
}

/// Result type alias for engine operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
