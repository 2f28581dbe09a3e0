//! # manggad-db
//!
//! libSQL storage for Manggad thesis records.
//!
//! Holds the `theses` table and the repository methods the search layer
//! reads through: listing, structured-facet lookups, the atomic
//! recommendation counter, and bulk seeding. Opens either a local file
//! (or `:memory:`) or a remote libSQL/Turso database.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod retry;
pub mod service;

#[cfg(test)]
mod test_support;

use libsql::Builder;
use libsql::params::IntoParams;

use error::DatabaseError;
use retry::{RetryConfig, is_transient_remote_error};

/// Central database handle.
///
/// Wraps a libSQL database and connection. Remote handles retry transient
/// infrastructure errors; local handles never do.
pub struct ManggadDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
    retry: RetryConfig,
}

impl ManggadDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let manggad_db = Self {
            db,
            conn,
            remote: false,
            retry: RetryConfig::default(),
        };
        manggad_db.run_migrations().await?;
        tracing::debug!(path, "opened local database");
        Ok(manggad_db)
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;

        let manggad_db = Self {
            db,
            conn,
            remote: true,
            retry: RetryConfig::default(),
        };
        manggad_db.run_migrations().await?;
        tracing::debug!(url, "opened remote database");
        Ok(manggad_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether this handle talks to a remote database.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"ths-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    /// Execute a statement, retrying transient errors on remote handles.
    ///
    /// `params` is a factory because libSQL consumes parameters per attempt.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` once retries are exhausted or for any
    /// non-transient failure.
    pub async fn execute_with<F, P>(&self, sql: &str, params: F) -> Result<u64, DatabaseError>
    where
        F: Fn() -> P,
        P: IntoParams,
    {
        let mut attempt = 1;
        loop {
            match self.conn.execute(sql, params()).await {
                Ok(affected) => return Ok(affected),
                Err(e) if self.should_retry(&e, attempt) => {
                    self.backoff(&e, attempt).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Run a query, retrying transient errors on remote handles.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` once retries are exhausted or for any
    /// non-transient failure.
    pub async fn query_with<F, P>(&self, sql: &str, params: F) -> Result<libsql::Rows, DatabaseError>
    where
        F: Fn() -> P,
        P: IntoParams,
    {
        let mut attempt = 1;
        loop {
            match self.conn.query(sql, params()).await {
                Ok(rows) => return Ok(rows),
                Err(e) if self.should_retry(&e, attempt) => {
                    self.backoff(&e, attempt).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn should_retry(&self, e: &libsql::Error, attempt: u32) -> bool {
        self.remote && attempt < self.retry.max_attempts && is_transient_remote_error(e)
    }

    async fn backoff(&self, e: &libsql::Error, attempt: u32) {
        let delay = self.retry.delay_for(attempt);
        tracing::warn!(error = %e, attempt, ?delay, "transient database error; retrying");
        tokio::time::sleep(delay).await;
    }
}
