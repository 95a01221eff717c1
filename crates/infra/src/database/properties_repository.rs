//! SQLite-backed properties store.
//!
//! One flat key/value namespace for the whole service. All database
//! operations run in `spawn_blocking`.

use std::sync::Arc;

use async_trait::async_trait;
use formguest_core::PropertiesStore;
use formguest_domain::Result as DomainResult;
use rusqlite::{params, OptionalExtension};
use tokio::task;
use tracing::debug;

use super::manager::{map_join_error, map_sql_error, DbManager};
use super::pool::SqliteConnection;

pub struct SqlitePropertiesStore {
    db: Arc<DbManager>,
}

impl SqlitePropertiesStore {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PropertiesStore for SqlitePropertiesStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let db = Arc::clone(&self.db);
        let key = key.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<String>> {
            let conn = db.get_connection()?;
            query_value(&conn, &key).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn set_all(&self, entries: &[(&str, &str)]) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let entries: Vec<(String, String)> =
            entries.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();

        task::spawn_blocking(move || -> DomainResult<()> {
            let mut conn = db.get_connection()?;
            upsert_values(&mut conn, &entries).map_err(map_sql_error)?;
            debug!(keys = entries.len(), "properties written");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete_all(&self) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            let removed = conn.execute("DELETE FROM properties", []).map_err(map_sql_error)?;
            debug!(removed, "properties cleared");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

// ============================================================================
// Synchronous SQL Operations (called inside spawn_blocking)
// ============================================================================

fn query_value(conn: &SqliteConnection, key: &str) -> rusqlite::Result<Option<String>> {
    conn.query_row("SELECT value FROM properties WHERE key = ?1", params![key], |row| row.get(0))
        .optional()
}

/// Write every entry in one transaction so readers never see half a binding.
fn upsert_values(conn: &mut SqliteConnection, entries: &[(String, String)]) -> rusqlite::Result<()> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO properties (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )?;
        for (key, value) in entries {
            stmt.execute(params![key, value])?;
        }
    }
    tx.commit()
}
