//! SQLite pool helpers
//!
//! Thin wrapper around `r2d2_sqlite` that applies connection pragmas and
//! converts pool errors into the domain error type.

use std::path::Path;
use std::time::Duration;

use formguest_domain::{FormGuestError, Result as DomainResult};
use r2d2_sqlite::SqliteConnectionManager;

use crate::errors::InfraError;

pub type SqlitePool = r2d2::Pool<SqliteConnectionManager>;
pub type SqliteConnection = r2d2::PooledConnection<SqliteConnectionManager>;

const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Open a pool on the database file at `path`, creating it if needed.
pub fn create_sqlite_pool<P: AsRef<Path>>(path: P, max_size: u32) -> DomainResult<SqlitePool> {
    let manager = SqliteConnectionManager::file(path.as_ref()).with_init(|conn| {
        conn.execute_batch(&format!(
            "PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}; PRAGMA journal_mode = WAL;"
        ))
    });

    r2d2::Pool::builder()
        .max_size(max_size.max(1))
        .connection_timeout(Duration::from_secs(10))
        .build(manager)
        .map_err(|err| FormGuestError::from(InfraError::from(err)))
}
