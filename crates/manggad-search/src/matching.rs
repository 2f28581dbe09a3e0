//! Record-level evaluation of a [`QueryDescriptor`].
//!
//! Every active sub-filter must pass:
//! - text: any term is a case-insensitive substring of the title, abstract,
//!   a keyword, or an author
//! - year: exact equality with `year_of_submission`
//! - department / program: the record's label is one of the selected labels
//!
//! Inactive sub-filters (no terms, no year, empty sets) always pass.

use manggad_core::entities::ThesisRecord;

use crate::filter::QueryDescriptor;

#[must_use]
pub fn record_matches(descriptor: &QueryDescriptor, record: &ThesisRecord) -> bool {
    record.matches_any_term(&descriptor.text_terms)
        && descriptor
            .year_filter
            .is_none_or(|year| record.year_of_submission == Some(year))
        && (descriptor.department_filter.is_empty()
            || descriptor
                .department_filter
                .iter()
                .any(|d| d.label() == record.department))
        && (descriptor.program_filter.is_empty()
            || descriptor
                .program_filter
                .iter()
                .any(|p| p.label() == record.program))
}

/// Matching records from `records`, order preserved.
pub fn filter_records<'a, I>(descriptor: &QueryDescriptor, records: I) -> Vec<ThesisRecord>
where
    I: IntoIterator<Item = &'a ThesisRecord>,
{
    records
        .into_iter()
        .filter(|record| record_matches(descriptor, record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FacetValue, FilterSelection, build_descriptor};
    use crate::sample::sample_theses;
    use manggad_core::enums::{Department, Program};
    use pretty_assertions::assert_eq;

    fn titles(records: &[ThesisRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    fn run(selection: &FilterSelection) -> Vec<ThesisRecord> {
        let descriptor = build_descriptor(selection).unwrap();
        filter_records(&descriptor, &sample_theses())
    }

    #[test]
    fn noop_descriptor_matches_everything() {
        let all = sample_theses();
        let matched = filter_records(&QueryDescriptor::default(), &all);
        assert_eq!(matched, all);
    }

    #[test]
    fn text_matches_keywords_and_authors_too() {
        let by_keyword = run(&FilterSelection::new("hospitality"));
        assert!(by_keyword.iter().any(|r| r.keywords.contains(&"hospitality".into())));

        let by_author = run(&FilterSelection::new("SANTOS"));
        assert!(!by_author.is_empty());
        assert!(
            by_author
                .iter()
                .all(|r| r.authors.iter().any(|a| a.contains("Santos")))
        );
    }

    #[test]
    fn any_term_suffices() {
        let matched = run(&FilterSelection::new("tourism bridges"));
        assert!(titles(&matched).contains(&"Sustainable Tourism Practices"));
        assert!(matched.iter().any(|r| r.program == Program::CivilEngineering.label()));
    }

    #[test]
    fn year_is_exact() {
        let matched = run(&FilterSelection::default().with_year(2023));
        assert!(!matched.is_empty());
        assert!(matched.iter().all(|r| r.year_of_submission == Some(2023)));
    }

    #[test]
    fn record_without_year_fails_year_filter() {
        let mut record = sample_theses().remove(0);
        record.year_of_submission = None;
        let descriptor = QueryDescriptor {
            year_filter: Some(2024),
            ..Default::default()
        };
        assert!(!record_matches(&descriptor, &record));
    }

    #[test]
    fn department_filter_excludes_text_matches_elsewhere() {
        let selection = FilterSelection::new("tourism")
            .with_facet(FacetValue::Department(Department::Sbit.label().into()));
        assert!(run(&selection).is_empty());
    }
}
