//! Search behavior configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a search with no text, year, or facets returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyQueryPolicy {
    /// Return every record in store order (default listing).
    #[default]
    ListAll,
    /// Return no records.
    Empty,
}

impl EmptyQueryPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListAll => "list_all",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for EmptyQueryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Behavior for a query with nothing to filter on.
    #[serde(default)]
    pub empty_query: EmptyQueryPolicy,

    /// Serve the built-in sample dataset when the store is unreachable.
    /// Meant for demos; leave off in production.
    #[serde(default)]
    pub fallback_to_sample: bool,
}
