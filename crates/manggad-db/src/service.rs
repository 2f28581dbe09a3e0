//! Service layer owning the database handle.
//!
//! All repository methods are implemented as `impl ManggadService` blocks in
//! `crate::repos`.

use crate::ManggadDb;
use crate::error::DatabaseError;

/// Entry point for thesis storage operations.
pub struct ManggadService {
    db: ManggadDb,
}

impl ManggadService {
    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = ManggadDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create a service over a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the remote database cannot be reached.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = ManggadDb::open_remote(url, auth_token).await?;
        Ok(Self { db })
    }

    /// Wrap an already-open handle.
    #[must_use]
    pub const fn from_db(db: ManggadDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ManggadDb {
        &self.db
    }
}
