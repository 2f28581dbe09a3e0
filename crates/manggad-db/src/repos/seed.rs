//! Bulk loading of thesis records.
//!
//! Rows are inserted one at a time. A row that fails validation or insertion
//! is logged and recorded in the report; the remaining rows still load.

use manggad_core::entities::NewThesis;
use serde::Serialize;

use crate::service::ManggadService;

/// A row the seeder did not insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedSkip {
    /// Position of the row in the input.
    pub index: usize,
    pub title: String,
    pub reason: String,
}

/// Outcome of a seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// IDs assigned to inserted rows, in input order.
    pub inserted: Vec<String>,
    pub skipped: Vec<SeedSkip>,
}

impl ManggadService {
    /// Insert every row it can. Never fails as a whole.
    pub async fn seed_theses(&self, rows: Vec<NewThesis>) -> SeedReport {
        let mut report = SeedReport::default();
        let total = rows.len();

        for (index, row) in rows.into_iter().enumerate() {
            let title = row.title.clone();
            match self.create_thesis(row).await {
                Ok(thesis) => report.inserted.push(thesis.id),
                Err(error) => {
                    tracing::warn!(index, %title, %error, "skipping seed row");
                    report.skipped.push(SeedSkip {
                        index,
                        title,
                        reason: error.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            total,
            inserted = report.inserted.len(),
            skipped = report.skipped.len(),
            "seeding finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::{new_thesis, test_service};
    use manggad_core::enums::Program;

    #[tokio::test]
    async fn seeds_all_valid_rows() {
        let svc = test_service().await;
        let rows = vec![
            new_thesis("First", Program::Accountancy, Some(2021)),
            new_thesis("Second", Program::Architecture, Some(2022)),
        ];

        let report = svc.seed_theses(rows).await;
        assert_eq!(report.inserted.len(), 2);
        assert!(report.skipped.is_empty());
        assert_eq!(svc.list_theses().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn invalid_rows_are_skipped_and_the_rest_load() {
        let svc = test_service().await;
        let mut bad = new_thesis("", Program::Psychology, None);
        bad.department = String::new();
        let rows = vec![
            new_thesis("Kept", Program::ComputerScience, Some(2020)),
            bad,
            new_thesis("Also kept", Program::SecondaryEducation, None),
        ];

        let report = svc.seed_theses(rows).await;
        assert_eq!(report.inserted.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].index, 1);

        let titles: Vec<String> = svc
            .list_theses()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["Kept", "Also kept"]);
    }
}
