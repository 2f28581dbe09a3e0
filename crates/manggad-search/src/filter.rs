//! Filter query builder.
//!
//! A [`FilterSelection`] is what a user picked: raw search text, an optional
//! year, and checked department/program boxes. [`build_descriptor`] turns it
//! into a [`QueryDescriptor`], the typed form the executor evaluates.
//!
//! Facet values carry an explicit [`FacetValue`] tag. Departments and
//! programs are resolved against their own vocabulary only, so a label is
//! never classified by looking at its wording.

use std::collections::BTreeSet;

use manggad_core::enums::{Department, Program};
use manggad_db::repos::thesis::ThesisFilter;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// One checked facet box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "facet", content = "value", rename_all = "snake_case")]
pub enum FacetValue {
    Department(String),
    Program(String),
}

/// Raw search input, created per search and discarded afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub free_text: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub departments: BTreeSet<String>,
    #[serde(default)]
    pub programs: BTreeSet<String>,
}

impl FilterSelection {
    #[must_use]
    pub fn new(free_text: impl Into<String>) -> Self {
        Self {
            free_text: free_text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub fn with_facet(mut self, facet: FacetValue) -> Self {
        match facet {
            FacetValue::Department(label) => {
                self.departments.insert(label);
            }
            FacetValue::Program(label) => {
                self.programs.insert(label);
            }
        }
        self
    }

    /// Checkbox behavior: select the facet if absent, deselect it if present.
    pub fn toggle(&mut self, facet: FacetValue) {
        let (set, label) = match facet {
            FacetValue::Department(label) => (&mut self.departments, label),
            FacetValue::Program(label) => (&mut self.programs, label),
        };
        if !set.remove(&label) {
            set.insert(label);
        }
    }
}

/// Normalized, executable search intent.
///
/// Empty sets and `None` mean "no constraint" on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryDescriptor {
    /// Lowercase search tokens, de-duplicated, in input order.
    pub text_terms: Vec<String>,
    pub year_filter: Option<i32>,
    pub department_filter: BTreeSet<Department>,
    pub program_filter: BTreeSet<Program>,
}

impl QueryDescriptor {
    /// True when nothing constrains the result set.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.text_terms.is_empty()
            && self.year_filter.is_none()
            && self.department_filter.is_empty()
            && self.program_filter.is_empty()
    }

    /// Label-level filter for the database store.
    #[must_use]
    pub fn to_filter(&self) -> ThesisFilter {
        ThesisFilter {
            terms: self.text_terms.clone(),
            year: self.year_filter,
            departments: self
                .department_filter
                .iter()
                .map(|d| d.label().to_string())
                .collect(),
            programs: self
                .program_filter
                .iter()
                .map(|p| p.label().to_string())
                .collect(),
        }
    }
}

/// Characters trimmed from the ends of a token.
const SEPARATORS: &[char] = &[
    ',', ';', ':', '.', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'',
];

/// Split free text into search terms.
///
/// Whitespace-separated, lowercased, with leading and trailing separators
/// stripped (`"(AI),"` becomes `"ai"`). Other symbols are part of the term,
/// so `"C#"` and `"C++"` stay distinct from `"c"`. A token made only of
/// separators is kept as written. Repeated terms keep their first position.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for raw in text.split_whitespace() {
        let trimmed = raw.trim_matches(SEPARATORS);
        let term = if trimmed.is_empty() { raw } else { trimmed }.to_lowercase();
        if !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}

/// Build a descriptor from a selection. Pure; performs no I/O.
///
/// # Errors
///
/// Returns [`SearchError::MalformedFilter`] when a department or program
/// label is not in its vocabulary.
pub fn build_descriptor(selection: &FilterSelection) -> Result<QueryDescriptor, SearchError> {
    let department_filter = selection
        .departments
        .iter()
        .map(|label| Department::from_label(label))
        .collect::<Result<BTreeSet<_>, _>>()?;
    let program_filter = selection
        .programs
        .iter()
        .map(|label| Program::from_label(label))
        .collect::<Result<BTreeSet<_>, _>>()?;

    Ok(QueryDescriptor {
        text_terms: tokenize(&selection.free_text),
        year_filter: selection.year,
        department_filter,
        program_filter,
    })
}
