//! Database connection manager backed by an r2d2 SQLite pool.

use std::path::{Path, PathBuf};

use formguest_domain::{DatabaseConfig, FormGuestError, Result};
use rusqlite::params;
use tokio::task;
use tracing::info;

use super::pool::{create_sqlite_pool, SqliteConnection, SqlitePool};
use crate::errors::InfraError;

const SCHEMA_VERSION: i32 = 1;
const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Database manager that wraps a [`SqlitePool`].
pub struct DbManager {
    pool: SqlitePool,
    path: PathBuf,
}

impl DbManager {
    /// Create a new manager with the given pool size.
    pub fn new<P: AsRef<Path>>(db_path: P, pool_size: u32) -> Result<Self> {
        let path = db_path.as_ref().to_path_buf();
        let pool = create_sqlite_pool(&path, pool_size)?;

        info!(
            db_path = %path.display(),
            max_connections = pool.max_size(),
            "sqlite pool initialised"
        );

        Ok(Self { pool, path })
    }

    /// Open the configured database and bring its schema up to date.
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        let manager = Self::new(&config.path, config.pool_size)?;
        manager.run_migrations()?;
        Ok(manager)
    }

    /// Acquire a connection from the pool.
    pub fn get_connection(&self) -> Result<SqliteConnection> {
        self.pool.get().map_err(|err| InfraError::from(err).into())
    }

    /// Ensure the full schema exists on the current database.
    pub fn run_migrations(&self) -> Result<()> {
        let conn = self.get_connection()?;
        create_schema(&conn)
    }

    /// Return the configured database path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Verify the database is reachable and answering queries.
    pub fn health_check(&self) -> Result<()> {
        let conn = self.get_connection()?;
        conn.query_row("SELECT 1", params![], |row| row.get::<_, i32>(0)).map_err(map_sql_error)?;
        Ok(())
    }
}

fn create_schema(conn: &SqliteConnection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL).map_err(map_sql_error)?;
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?, CAST(strftime('%s','now') AS INTEGER))",
        params![SCHEMA_VERSION],
    )
    .map_err(map_sql_error)?;
    Ok(())
}

pub(crate) fn map_sql_error(err: rusqlite::Error) -> FormGuestError {
    FormGuestError::from(InfraError::from(err))
}

/// Map JoinError from spawn_blocking to FormGuestError.
pub(crate) fn map_join_error(err: task::JoinError) -> FormGuestError {
    if err.is_cancelled() {
        FormGuestError::Internal("blocking task cancelled".into())
    } else {
        FormGuestError::Internal(format!("blocking task failed: {err}"))
    }
}
