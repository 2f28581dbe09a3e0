//! Thesis repository: CRUD, facet lookups, and the recommendation counter.

use chrono::Utc;

use manggad_core::entities::{NewThesis, ThesisRecord};
use manggad_core::ids::PREFIX_THESIS;

use crate::error::DatabaseError;
use crate::helpers::{
    encode_string_list, get_opt_string, get_opt_year, parse_datetime, parse_string_list,
};
use crate::service::ManggadService;

const SELECT_COLS: &str = "id, title, abstract_text, keywords, authors, department, program, \
     year_of_submission, degree_awarded, recommendation_count, cover_image_url, created_at";

/// Label-level filter understood by the database.
///
/// Structured fields are evaluated in SQL. `terms` are applied to the loaded
/// rows with [`ThesisRecord::matches_any_term`] so every store shares one
/// text-matching rule. Empty collections mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThesisFilter {
    pub terms: Vec<String>,
    pub year: Option<i32>,
    pub departments: Vec<String>,
    pub programs: Vec<String>,
}

fn row_to_thesis(row: &libsql::Row) -> Result<ThesisRecord, DatabaseError> {
    let count = row.get::<i64>(9)?;
    Ok(ThesisRecord {
        id: row.get::<String>(0)?,
        title: row.get::<String>(1)?,
        abstract_text: get_opt_string(row, 2)?,
        keywords: parse_string_list(&row.get::<String>(3)?)?,
        authors: parse_string_list(&row.get::<String>(4)?)?,
        department: row.get::<String>(5)?,
        program: row.get::<String>(6)?,
        year_of_submission: get_opt_year(row, 7)?,
        degree_awarded: get_opt_year(row, 8)?,
        recommendation_count: u32::try_from(count)
            .map_err(|_| DatabaseError::Query(format!("recommendation_count out of range: {count}")))?,
        cover_image_url: get_opt_string(row, 10)?,
        created_at: parse_datetime(&row.get::<String>(11)?)?,
    })
}

async fn collect_theses(mut rows: libsql::Rows) -> Result<Vec<ThesisRecord>, DatabaseError> {
    let mut theses = Vec::new();
    while let Some(row) = rows.next().await? {
        theses.push(row_to_thesis(&row)?);
    }
    Ok(theses)
}

/// Append `column IN (?n, ...)` for a non-empty label set.
fn push_in_clause(
    column: &str,
    values: &[String],
    clauses: &mut Vec<String>,
    params: &mut Vec<libsql::Value>,
) {
    if values.is_empty() {
        return;
    }
    let start = params.len() + 1;
    let placeholders = (start..start + values.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    clauses.push(format!("{column} IN ({placeholders})"));
    params.extend(values.iter().map(|v| libsql::Value::from(v.as_str())));
}

impl ManggadService {
    pub async fn create_thesis(&self, new: NewThesis) -> Result<ThesisRecord, DatabaseError> {
        let new = new.normalized();
        new.validate()?;
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_THESIS).await?;
        let keywords = encode_string_list(&new.keywords)?;
        let authors = encode_string_list(&new.authors)?;

        self.db()
            .execute_with(
                "INSERT INTO theses (id, title, abstract_text, keywords, authors, department, program,
                                     year_of_submission, degree_awarded, recommendation_count, cover_image_url, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, 0, ?10, ?11)",
                || {
                    libsql::params![
                        id.as_str(),
                        new.title.as_str(),
                        new.abstract_text.as_deref(),
                        keywords.as_str(),
                        authors.as_str(),
                        new.department.as_str(),
                        new.program.as_str(),
                        new.year_of_submission.map(i64::from),
                        new.degree_awarded.map(i64::from),
                        new.cover_image_url.as_deref(),
                        now.to_rfc3339()
                    ]
                },
            )
            .await?;

        tracing::debug!(id = %id, title = %new.title, "created thesis");
        Ok(new.into_record(id, now))
    }

    pub async fn get_thesis(&self, id: &str) -> Result<ThesisRecord, DatabaseError> {
        let sql = format!("SELECT {SELECT_COLS} FROM theses WHERE id = ?1");
        let mut rows = self.db().query_with(&sql, || [id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_thesis(&row)
    }

    /// Every thesis in insertion order.
    pub async fn list_theses(&self) -> Result<Vec<ThesisRecord>, DatabaseError> {
        let sql = format!("SELECT {SELECT_COLS} FROM theses ORDER BY rowid");
        let rows = self.db().query_with(&sql, || ()).await?;
        collect_theses(rows).await
    }

    /// Theses passing every active part of `filter`, in insertion order.
    pub async fn find_theses(
        &self,
        filter: &ThesisFilter,
    ) -> Result<Vec<ThesisRecord>, DatabaseError> {
        let mut clauses = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(year) = filter.year {
            params.push(i64::from(year).into());
            clauses.push(format!("year_of_submission = ?{}", params.len()));
        }
        push_in_clause("department", &filter.departments, &mut clauses, &mut params);
        push_in_clause("program", &filter.programs, &mut clauses, &mut params);

        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", clauses.join(" AND "))
        };
        let sql = format!("SELECT {SELECT_COLS} FROM theses {where_sql} ORDER BY rowid");

        let rows = self
            .db()
            .query_with(&sql, || libsql::params_from_iter(params.clone()))
            .await?;
        let mut theses = collect_theses(rows).await?;
        theses.retain(|t| t.matches_any_term(&filter.terms));

        tracing::debug!(
            terms = filter.terms.len(),
            structured_clauses = clauses.len(),
            matched = theses.len(),
            "thesis filter evaluated"
        );
        Ok(theses)
    }

    /// Add one recommendation and return the new count.
    ///
    /// A single `UPDATE ... RETURNING` statement, so concurrent calls never
    /// lose an increment. The count saturates at `u32::MAX`: a row already at
    /// the cap is left untouched and its count returned.
    pub async fn increment_recommendation(&self, id: &str) -> Result<u32, DatabaseError> {
        let mut rows = self
            .db()
            .query_with(
                "UPDATE theses SET recommendation_count = recommendation_count + 1
                 WHERE id = ?1 AND recommendation_count < 4294967295
                 RETURNING recommendation_count",
                || [id],
            )
            .await?;
        let Some(row) = rows.next().await? else {
            // Either no such id or the counter is saturated.
            let thesis = self.get_thesis(id).await?;
            tracing::debug!(id, "recommendation count saturated");
            return Ok(thesis.recommendation_count);
        };
        let count = row.get::<i64>(0)?;
        u32::try_from(count)
            .map_err(|_| DatabaseError::Query(format!("recommendation_count out of range: {count}")))
    }

    pub async fn delete_thesis(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .execute_with("DELETE FROM theses WHERE id = ?1", || [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(id, "deleted thesis");
        Ok(())
    }
}
