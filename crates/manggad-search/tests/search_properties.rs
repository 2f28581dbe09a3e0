//! Behavioral properties of search, checked against both store backends.

mod common;

use std::collections::BTreeSet;

use manggad_core::entities::ThesisRecord;
use manggad_core::enums::{Department, Program};
use manggad_search::sample::sample_theses;
use manggad_search::{
    FacetValue, FilterSelection, MemoryStore, SearchExecutor, ThesisStore, build_descriptor,
};
use pretty_assertions::assert_eq;

use common::{scenario_records, seeded_service};

fn titles(records: &[ThesisRecord]) -> Vec<String> {
    records.iter().map(|r| r.title.clone()).collect()
}

async fn search<S: ThesisStore>(
    executor: &SearchExecutor<S>,
    selection: &FilterSelection,
) -> Vec<ThesisRecord> {
    executor.search(selection, None).await.unwrap()
}

async fn check_scenario<S: ThesisStore>(executor: SearchExecutor<S>) {
    let tourism = search(&executor, &FilterSelection::new("tourism")).await;
    assert_eq!(titles(&tourism), vec!["Sustainable Tourism Practices"]);

    let sbit = search(
        &executor,
        &FilterSelection::default()
            .with_facet(FacetValue::Department(Department::Sbit.label().into())),
    )
    .await;
    assert_eq!(
        titles(&sbit),
        vec!["Digital Transformation in Higher Education"]
    );

    let year_2023 = search(&executor, &FilterSelection::default().with_year(2023)).await;
    assert!(year_2023.is_empty());
}

#[tokio::test]
async fn reference_scenario_memory() {
    check_scenario(SearchExecutor::new(MemoryStore::new(scenario_records()).unwrap())).await;
}

#[tokio::test]
async fn reference_scenario_database() {
    check_scenario(SearchExecutor::new(seeded_service(&scenario_records()).await)).await;
}

async fn check_title_substring<S: ThesisStore>(executor: SearchExecutor<S>) {
    let all = executor.store().list_all().await.unwrap();
    for record in &all {
        for word in record.title.split_whitespace() {
            // Case-flipped substring of the title.
            let term: String = word
                .chars()
                .take(4)
                .map(|c| {
                    if c.is_uppercase() {
                        c.to_ascii_lowercase()
                    } else {
                        c.to_ascii_uppercase()
                    }
                })
                .collect();
            let found = search(&executor, &FilterSelection::new(term.clone())).await;
            assert!(
                found.iter().any(|r| r.id == record.id),
                "term {term:?} should find {:?}",
                record.title
            );
        }
    }
}

#[tokio::test]
async fn title_substring_always_matches_memory() {
    check_title_substring(SearchExecutor::new(MemoryStore::new(sample_theses()).unwrap())).await;
}

#[tokio::test]
async fn title_substring_always_matches_database() {
    check_title_substring(SearchExecutor::new(seeded_service(&sample_theses()).await)).await;
}

async fn check_department_exclusion<S: ThesisStore>(executor: SearchExecutor<S>) {
    for department in Department::ALL {
        let selection = FilterSelection::default()
            .with_facet(FacetValue::Department(department.label().into()));
        let found = search(&executor, &selection).await;
        assert!(found.iter().all(|r| r.department == department.label()));
    }
}

#[tokio::test]
async fn department_filter_excludes_other_schools_memory() {
    check_department_exclusion(SearchExecutor::new(MemoryStore::new(sample_theses()).unwrap())).await;
}

#[tokio::test]
async fn department_filter_excludes_other_schools_database() {
    check_department_exclusion(SearchExecutor::new(seeded_service(&sample_theses()).await)).await;
}

async fn check_intersection<S: ThesisStore>(executor: SearchExecutor<S>) {
    let ids = |records: Vec<ThesisRecord>| -> BTreeSet<String> {
        records.into_iter().map(|r| r.id).collect()
    };

    for department in Department::ALL {
        for program in Program::ALL {
            let dept_facet = FacetValue::Department(department.label().into());
            let prog_facet = FacetValue::Program(program.label().into());

            let by_dept = ids(search(
                &executor,
                &FilterSelection::default().with_facet(dept_facet.clone()),
            )
            .await);
            let by_prog = ids(search(
                &executor,
                &FilterSelection::default().with_facet(prog_facet.clone()),
            )
            .await);
            let both = ids(search(
                &executor,
                &FilterSelection::default()
                    .with_facet(prog_facet)
                    .with_facet(dept_facet),
            )
            .await);

            let expected: BTreeSet<String> = by_dept.intersection(&by_prog).cloned().collect();
            assert_eq!(both, expected, "{department:?} x {program:?}");
        }
    }
}

#[tokio::test]
async fn combined_facets_intersect_memory() {
    check_intersection(SearchExecutor::new(MemoryStore::new(sample_theses()).unwrap())).await;
}

#[tokio::test]
async fn combined_facets_intersect_database() {
    check_intersection(SearchExecutor::new(seeded_service(&sample_theses()).await)).await;
}

async fn check_idempotence<S: ThesisStore>(executor: SearchExecutor<S>) {
    let selection = FilterSelection::new("santos study")
        .with_facet(FacetValue::Department(Department::Sbit.label().into()));
    let descriptor = build_descriptor(&selection).unwrap();

    let first = executor.execute(&descriptor, None).await.unwrap();
    let second = executor.execute(&descriptor, None).await.unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[tokio::test]
async fn repeated_execution_is_stable_memory() {
    check_idempotence(SearchExecutor::new(MemoryStore::new(sample_theses()).unwrap())).await;
}

#[tokio::test]
async fn repeated_execution_is_stable_database() {
    check_idempotence(SearchExecutor::new(seeded_service(&sample_theses()).await)).await;
}

#[tokio::test]
async fn stores_agree_on_results() {
    let memory = SearchExecutor::new(MemoryStore::new(sample_theses()).unwrap());
    let database = SearchExecutor::new(seeded_service(&sample_theses()).await);

    for text in ["", "tourism", "SANTOS", "learn", "bridges stress", "zzz"] {
        for year in [None, Some(2022), Some(2024)] {
            let mut selection = FilterSelection::new(text);
            selection.year = year;
            let a = titles(&search(&memory, &selection).await);
            let b = titles(&search(&database, &selection).await);
            assert_eq!(a, b, "text {text:?} year {year:?}");
        }
    }
}
