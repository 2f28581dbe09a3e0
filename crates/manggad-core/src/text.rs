//! Normalization of list-valued text fields.
//!
//! Thesis sources supply `keywords` and `authors` either as a JSON array or
//! as one delimited string (`"ai, education; ethics"`). Both shapes are
//! accepted on input and normalized to a plain `Vec<String>`.

use serde::{Deserialize, Deserializer};

/// Separators accepted inside a single delimited string.
const DELIMITERS: &[char] = &[',', ';'];

/// Either representation of a list-valued text field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TextList {
    Delimited(String),
    Items(Vec<String>),
}

impl Default for TextList {
    fn default() -> Self {
        Self::Items(Vec::new())
    }
}

impl TextList {
    /// Split into trimmed, non-empty entries in source order.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            Self::Delimited(s) => s.split(DELIMITERS).collect(),
            Self::Items(items) => items.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    /// Keyword form: lowercase, de-duplicated, first occurrence wins.
    #[must_use]
    pub fn into_keywords(self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for entry in self.entries() {
            let lowered = entry.to_lowercase();
            if !out.contains(&lowered) {
                out.push(lowered);
            }
        }
        out
    }

    /// Author form: trimmed names, order and case kept.
    #[must_use]
    pub fn into_authors(self) -> Vec<String> {
        self.entries()
    }
}

/// `deserialize_with` adapter for keyword fields.
///
/// # Errors
///
/// Fails when the value is neither a string nor an array of strings.
pub fn deserialize_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let list = Option::<TextList>::deserialize(deserializer)?.unwrap_or_default();
    Ok(list.into_keywords())
}

/// `deserialize_with` adapter for author fields.
///
/// # Errors
///
/// Fails when the value is neither a string nor an array of strings.
pub fn deserialize_authors<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let list = Option::<TextList>::deserialize(deserializer)?.unwrap_or_default();
    Ok(list.into_authors())
}
