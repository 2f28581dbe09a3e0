//! Shared fixtures for search integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use manggad_core::entities::{NewThesis, ThesisRecord};
use manggad_core::enums::{Department, Program};
use manggad_db::service::ManggadService;
use manggad_search::{QueryDescriptor, SearchError, ThesisStore};

pub fn record(id: &str, title: &str, department: Department, year: i32) -> ThesisRecord {
    let program = Program::ALL
        .into_iter()
        .find(|p| p.department() == department)
        .unwrap_or(Program::InformationTechnology);
    ThesisRecord {
        id: id.into(),
        title: title.into(),
        abstract_text: None,
        keywords: Vec::new(),
        authors: Vec::new(),
        department: department.label().into(),
        program: program.label().into(),
        year_of_submission: Some(year),
        degree_awarded: None,
        recommendation_count: 0,
        cover_image_url: None,
        created_at: Utc::now(),
    }
}

/// The two records of the reference scenario.
pub fn scenario_records() -> Vec<ThesisRecord> {
    vec![
        record(
            "ths-00000001",
            "Digital Transformation in Higher Education",
            Department::Sbit,
            2024,
        ),
        record(
            "ths-00000002",
            "Sustainable Tourism Practices",
            Department::Shtm,
            2024,
        ),
    ]
}

pub async fn seeded_service(records: &[ThesisRecord]) -> ManggadService {
    let svc = ManggadService::new_local(":memory:").await.unwrap();
    let rows = records
        .iter()
        .map(|r| NewThesis {
            title: r.title.clone(),
            abstract_text: r.abstract_text.clone(),
            keywords: r.keywords.clone(),
            authors: r.authors.clone(),
            department: r.department.clone(),
            program: r.program.clone(),
            year_of_submission: r.year_of_submission,
            degree_awarded: r.degree_awarded,
            cover_image_url: r.cover_image_url.clone(),
        })
        .collect();
    let report = svc.seed_theses(rows).await;
    assert!(report.skipped.is_empty());
    svc
}

/// Store whose every call fails as if the backend were down.
pub struct DownStore;

#[async_trait]
impl ThesisStore for DownStore {
    async fn list_all(&self) -> Result<Vec<ThesisRecord>, SearchError> {
        Err(SearchError::DataStoreUnavailable("connection refused".into()))
    }

    async fn find_by_filter(
        &self,
        _descriptor: &QueryDescriptor,
    ) -> Result<Vec<ThesisRecord>, SearchError> {
        Err(SearchError::DataStoreUnavailable("connection refused".into()))
    }

    async fn get(&self, _id: &str) -> Result<ThesisRecord, SearchError> {
        Err(SearchError::DataStoreUnavailable("connection refused".into()))
    }

    async fn increment_recommendation(&self, _id: &str) -> Result<u32, SearchError> {
        Err(SearchError::DataStoreUnavailable("connection refused".into()))
    }
}

/// Store that never answers.
pub struct StalledStore;

#[async_trait]
impl ThesisStore for StalledStore {
    async fn list_all(&self) -> Result<Vec<ThesisRecord>, SearchError> {
        std::future::pending().await
    }

    async fn find_by_filter(
        &self,
        _descriptor: &QueryDescriptor,
    ) -> Result<Vec<ThesisRecord>, SearchError> {
        std::future::pending().await
    }

    async fn get(&self, _id: &str) -> Result<ThesisRecord, SearchError> {
        std::future::pending().await
    }

    async fn increment_recommendation(&self, _id: &str) -> Result<u32, SearchError> {
        std::future::pending().await
    }
}
