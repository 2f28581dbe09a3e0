//! Search error types for manggad-search.

use manggad_core::errors::CoreError;
use manggad_db::error::DatabaseError;

/// Errors from building or executing a search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The backing store could not be reached or failed mid-query.
    #[error("data store unavailable: {0}")]
    DataStoreUnavailable(String),

    /// A facet value outside the known department or program vocabularies.
    #[error("malformed filter: {0}")]
    MalformedFilter(String),

    /// No thesis with the given id.
    #[error("thesis not found: {0}")]
    NotFound(String),

    /// The caller cancelled the search before the store answered.
    #[error("search cancelled")]
    Cancelled,
}

impl SearchError {
    /// Map a storage error for an operation on `id`.
    ///
    /// A missing row becomes [`SearchError::NotFound`]; everything else is
    /// treated as the store being unavailable.
    #[must_use]
    pub fn from_lookup(error: DatabaseError, id: &str) -> Self {
        match error {
            DatabaseError::NoResult => Self::NotFound(id.to_string()),
            other => Self::DataStoreUnavailable(other.to_string()),
        }
    }
}

impl From<DatabaseError> for SearchError {
    fn from(error: DatabaseError) -> Self {
        Self::DataStoreUnavailable(error.to_string())
    }
}

impl From<CoreError> for SearchError {
    fn from(error: CoreError) -> Self {
        Self::MalformedFilter(error.to_string())
    }
}
