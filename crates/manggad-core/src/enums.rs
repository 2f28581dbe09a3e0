//! Facet vocabularies for Manggad.
//!
//! Departments and programs are two disjoint, closed vocabularies. Records
//! store the human-readable label; filters carry the typed variant so the two
//! are never told apart by inspecting the label text.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

/// Normalize a label for vocabulary lookup: trimmed, inner whitespace
/// collapsed, ASCII-lowercased.
fn normalize_label(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

// ---------------------------------------------------------------------------
// Department
// ---------------------------------------------------------------------------

/// Academic school a thesis was submitted under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Sbit,
    Shtm,
    Sase,
    Seafa,
}

impl Department {
    pub const ALL: [Self; 4] = [Self::Sbit, Self::Shtm, Self::Sase, Self::Seafa];

    /// Short code, also the SQL and serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sbit => "sbit",
            Self::Shtm => "shtm",
            Self::Sase => "sase",
            Self::Seafa => "seafa",
        }
    }

    /// Full school name as stored on thesis records.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sbit => "School of Business and Information Technology (SBIT)",
            Self::Shtm => "School of Hospitality and Tourism Management (SHTM)",
            Self::Sase => "School of Arts, Sciences and Education (SASE)",
            Self::Seafa => "School of Engineering, Architecture and Fine Arts (SEAFA)",
        }
    }

    /// Resolve a full label or a short code, ignoring case and extra spaces.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownLabel` when the value names no department.
    pub fn from_label(value: &str) -> Result<Self, CoreError> {
        let wanted = normalize_label(value);
        Self::ALL
            .into_iter()
            .find(|d| normalize_label(d.label()) == wanted || d.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownLabel {
                vocabulary: "department".into(),
                value: value.to_string(),
            })
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Program
// ---------------------------------------------------------------------------

/// Degree program a thesis was written for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Program {
    InformationTechnology,
    ComputerScience,
    BusinessAdministration,
    Accountancy,
    HospitalityManagement,
    TourismManagement,
    Psychology,
    SecondaryEducation,
    CivilEngineering,
    Architecture,
}

impl Program {
    pub const ALL: [Self; 10] = [
        Self::InformationTechnology,
        Self::ComputerScience,
        Self::BusinessAdministration,
        Self::Accountancy,
        Self::HospitalityManagement,
        Self::TourismManagement,
        Self::Psychology,
        Self::SecondaryEducation,
        Self::CivilEngineering,
        Self::Architecture,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InformationTechnology => "information_technology",
            Self::ComputerScience => "computer_science",
            Self::BusinessAdministration => "business_administration",
            Self::Accountancy => "accountancy",
            Self::HospitalityManagement => "hospitality_management",
            Self::TourismManagement => "tourism_management",
            Self::Psychology => "psychology",
            Self::SecondaryEducation => "secondary_education",
            Self::CivilEngineering => "civil_engineering",
            Self::Architecture => "architecture",
        }
    }

    /// Program name as stored on thesis records.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InformationTechnology => "BS in Information Technology",
            Self::ComputerScience => "BS in Computer Science",
            Self::BusinessAdministration => "BS in Business Administration",
            Self::Accountancy => "BS in Accountancy",
            Self::HospitalityManagement => "BS in Hospitality Management",
            Self::TourismManagement => "BS in Tourism Management",
            Self::Psychology => "BS in Psychology",
            Self::SecondaryEducation => "BS in Secondary Education",
            Self::CivilEngineering => "BS in Civil Engineering",
            Self::Architecture => "BS in Architecture",
        }
    }

    /// The school that offers this program.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn department(self) -> Department {
        match self {
            Self::InformationTechnology
            | Self::ComputerScience
            | Self::BusinessAdministration
            | Self::Accountancy => Department::Sbit,
            Self::HospitalityManagement | Self::TourismManagement => Department::Shtm,
            Self::Psychology | Self::SecondaryEducation => Department::Sase,
            Self::CivilEngineering | Self::Architecture => Department::Seafa,
        }
    }

    /// Resolve a full label or a short code, ignoring case and extra spaces.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownLabel` when the value names no program.
    pub fn from_label(value: &str) -> Result<Self, CoreError> {
        let wanted = normalize_label(value);
        Self::ALL
            .into_iter()
            .find(|p| normalize_label(p.label()) == wanted || p.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownLabel {
                vocabulary: "program".into(),
                value: value.to_string(),
            })
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
