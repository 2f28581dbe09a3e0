//! Built-in sample theses.
//!
//! Served by the executor when sample fallback is enabled and the store is
//! unreachable, and used as a fixture in tests.

use chrono::{DateTime, TimeZone, Utc};
use manggad_core::entities::ThesisRecord;
use manggad_core::enums::Program;

struct SampleRow {
    title: &'static str,
    abstract_text: &'static str,
    keywords: &'static [&'static str],
    authors: &'static [&'static str],
    program: Program,
    year: i32,
    recommendations: u32,
}

const ROWS: &[SampleRow] = &[
    SampleRow {
        title: "Digital Transformation in Higher Education",
        abstract_text: "How universities adopt cloud platforms and learning management systems.",
        keywords: &["digital", "education", "cloud"],
        authors: &["Maria Santos", "Jose Reyes"],
        program: Program::InformationTechnology,
        year: 2024,
        recommendations: 12,
    },
    SampleRow {
        title: "Sustainable Tourism Practices",
        abstract_text: "Community-based tourism and its effect on coastal livelihoods.",
        keywords: &["tourism", "sustainability"],
        authors: &["Ana Cruz"],
        program: Program::TourismManagement,
        year: 2024,
        recommendations: 8,
    },
    SampleRow {
        title: "Guest Satisfaction in Boutique Hotels",
        abstract_text: "A survey of service quality drivers in small hotels.",
        keywords: &["hospitality", "service quality"],
        authors: &["Luis Garcia", "Carmen Dela Cruz"],
        program: Program::HospitalityManagement,
        year: 2023,
        recommendations: 5,
    },
    SampleRow {
        title: "Machine Learning for Enrollment Forecasting",
        abstract_text: "Predicting first-year enrollment with gradient boosted trees.",
        keywords: &["machine learning", "forecasting"],
        authors: &["Paolo Santos"],
        program: Program::ComputerScience,
        year: 2023,
        recommendations: 9,
    },
    SampleRow {
        title: "Seismic Retrofitting of Pedestrian Bridges",
        abstract_text: "Load modelling of steel footbridges under earthquake conditions.",
        keywords: &["bridges", "seismic", "structures"],
        authors: &["Ramon Villanueva"],
        program: Program::CivilEngineering,
        year: 2022,
        recommendations: 3,
    },
    SampleRow {
        title: "Study Habits and Academic Stress",
        abstract_text: "Correlating study routines with perceived stress among freshmen.",
        keywords: &["psychology", "stress"],
        authors: &["Isabel Ramos"],
        program: Program::Psychology,
        year: 2022,
        recommendations: 4,
    },
];

fn created_at(index: usize) -> DateTime<Utc> {
    let day = u32::try_from(index).map_or(1, |i| i + 1);
    Utc.with_ymd_and_hms(2024, 6, day, 9, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// The sample theses in a fixed order with stable ids.
#[must_use]
pub fn sample_theses() -> Vec<ThesisRecord> {
    ROWS.iter()
        .enumerate()
        .map(|(index, row)| ThesisRecord {
            id: format!("ths-sample{index:02}"),
            title: row.title.to_string(),
            abstract_text: Some(row.abstract_text.to_string()),
            keywords: row.keywords.iter().map(ToString::to_string).collect(),
            authors: row.authors.iter().map(ToString::to_string).collect(),
            department: row.program.department().label().to_string(),
            program: row.program.label().to_string(),
            year_of_submission: Some(row.year),
            degree_awarded: Some(row.year),
            recommendation_count: row.recommendations,
            cover_image_url: None,
            created_at: created_at(index),
        })
        .collect()
}
