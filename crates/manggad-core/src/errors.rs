//! Cross-cutting error types for Manggad.
//!
//! Domain-specific errors (`DatabaseError`, `SearchError`) live in their own
//! crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Manggad crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A label did not belong to the expected vocabulary.
    #[error("Unknown {vocabulary} '{value}'")]
    UnknownLabel { vocabulary: String, value: String },

    /// Data failed validation (empty title, malformed fields).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
