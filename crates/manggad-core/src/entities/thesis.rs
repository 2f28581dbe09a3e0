use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::text::{TextList, deserialize_authors, deserialize_keywords};

/// A submitted thesis or research work.
///
/// `keywords` and `authors` accept either a list or a delimited string on
/// input and always serialize as lists.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThesisRecord {
    pub id: String,
    pub title: String,
    #[serde(default, alias = "abstract", alias = "abstractText")]
    pub abstract_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_keywords")]
    #[schemars(with = "Vec<String>")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_authors")]
    #[schemars(with = "Vec<String>")]
    pub authors: Vec<String>,
    pub department: String,
    pub program: String,
    #[serde(default, alias = "yearOfSubmission")]
    pub year_of_submission: Option<i32>,
    #[serde(default, alias = "degreeAwarded")]
    pub degree_awarded: Option<i32>,
    #[serde(default, alias = "recommendationCount")]
    pub recommendation_count: u32,
    #[serde(default, alias = "coverImageUrl")]
    pub cover_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a thesis. The store assigns `id`, `created_at`, and
/// starts `recommendation_count` at zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewThesis {
    pub title: String,
    #[serde(default, alias = "abstract", alias = "abstractText")]
    pub abstract_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_keywords")]
    #[schemars(with = "Vec<String>")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_authors")]
    #[schemars(with = "Vec<String>")]
    pub authors: Vec<String>,
    pub department: String,
    pub program: String,
    #[serde(default, alias = "yearOfSubmission")]
    pub year_of_submission: Option<i32>,
    #[serde(default, alias = "degreeAwarded")]
    pub degree_awarded: Option<i32>,
    #[serde(default, alias = "coverImageUrl")]
    pub cover_image_url: Option<String>,
}

impl NewThesis {
    /// Trim the title and bring list fields into canonical form
    /// (lowercase de-duplicated keywords, trimmed authors).
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.keywords = TextList::Items(self.keywords).into_keywords();
        self.authors = TextList::Items(self.authors).into_authors();
        self
    }

    /// Check the fields the store relies on.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank title, department, or program.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("thesis title cannot be empty".into()));
        }
        if self.department.trim().is_empty() {
            return Err(CoreError::Validation("thesis department cannot be empty".into()));
        }
        if self.program.trim().is_empty() {
            return Err(CoreError::Validation("thesis program cannot be empty".into()));
        }
        Ok(())
    }

    /// Materialize into a record with the given identity.
    #[must_use]
    pub fn into_record(self, id: String, created_at: DateTime<Utc>) -> ThesisRecord {
        ThesisRecord {
            id,
            title: self.title,
            abstract_text: self.abstract_text,
            keywords: self.keywords,
            authors: self.authors,
            department: self.department,
            program: self.program,
            year_of_submission: self.year_of_submission,
            degree_awarded: self.degree_awarded,
            recommendation_count: 0,
            cover_image_url: self.cover_image_url,
            created_at,
        }
    }
}

impl ThesisRecord {
    /// Case-insensitive text match used by every store.
    ///
    /// True when `terms` is empty, or when any term is a substring of the
    /// title, the abstract, one keyword, or one author name.
    #[must_use]
    pub fn matches_any_term(&self, terms: &[String]) -> bool {
        if terms.is_empty() {
            return true;
        }
        let fields: Vec<String> = std::iter::once(self.title.as_str())
            .chain(self.abstract_text.as_deref())
            .chain(self.keywords.iter().map(String::as_str))
            .chain(self.authors.iter().map(String::as_str))
            .map(str::to_lowercase)
            .collect();

        terms.iter().any(|term| {
            let term = term.to_lowercase();
            fields.iter().any(|field| field.contains(&term))
        })
    }
}
