//! CLI response types returned as JSON by `manggad` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ThesisRecord;

/// Response from `manggad search`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SearchResultsResponse {
    pub query: String,
    pub year: Option<i32>,
    pub departments: Vec<String>,
    pub programs: Vec<String>,
    pub results: Vec<ThesisRecord>,
    pub total_results: u32,
}

/// Response from `manggad list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThesisListResponse {
    pub theses: Vec<ThesisRecord>,
    pub total: u32,
}

/// Response from `manggad recommend`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecommendResponse {
    pub id: String,
    pub recommendation_count: u32,
}

/// One entry of the `manggad facets` listing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FacetEntry {
    pub code: String,
    pub label: String,
}

/// Response from `manggad facets`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FacetsResponse {
    pub departments: Vec<FacetEntry>,
    pub programs: Vec<FacetEntry>,
}

/// Response from `manggad seed`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedResponse {
    pub inserted: u32,
    pub skipped: u32,
    pub errors: Vec<String>,
}
