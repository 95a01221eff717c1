//! SQLite-backed trigger registry.
//!
//! Triggers are scoped to the active form: listing only returns the form's
//! own registrations and new ones are created against it.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use formguest_core::TriggerRegistry;
use formguest_domain::{Result as DomainResult, Trigger, TriggerEvent};
use rusqlite::params;
use rusqlite::types::Type;
use tokio::task;
use uuid::Uuid;

use super::manager::{map_join_error, map_sql_error, DbManager};
use super::pool::SqliteConnection;

pub struct SqliteTriggerRegistry {
    db: Arc<DbManager>,
    form_id: String,
}

impl SqliteTriggerRegistry {
    pub fn new(db: Arc<DbManager>, form_id: impl Into<String>) -> Self {
        Self { db, form_id: form_id.into() }
    }
}

#[async_trait]
impl TriggerRegistry for SqliteTriggerRegistry {
    async fn list(&self) -> DomainResult<Vec<Trigger>> {
        let db = Arc::clone(&self.db);
        let form_id = self.form_id.clone();

        task::spawn_blocking(move || -> DomainResult<Vec<Trigger>> {
            let conn = db.get_connection()?;
            query_triggers(&conn, &form_id).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete(&self, trigger_id: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let trigger_id = trigger_id.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute("DELETE FROM triggers WHERE id = ?1", params![trigger_id])
                .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn create(&self, handler_name: &str, event: TriggerEvent) -> DomainResult<Trigger> {
        let db = Arc::clone(&self.db);
        let trigger = Trigger {
            id: Uuid::new_v4().to_string(),
            handler_name: handler_name.to_string(),
            event,
            form_id: self.form_id.clone(),
            created_at: Utc::now().trunc_subsecs(3),
        };

        task::spawn_blocking(move || -> DomainResult<Trigger> {
            let conn = db.get_connection()?;
            insert_trigger(&conn, &trigger).map_err(map_sql_error)?;
            Ok(trigger)
        })
        .await
        .map_err(map_join_error)?
    }
}

// ============================================================================
// Synchronous SQL Operations (called inside spawn_blocking)
// ============================================================================

fn query_triggers(conn: &SqliteConnection, form_id: &str) -> rusqlite::Result<Vec<Trigger>> {
    let mut stmt = conn.prepare(
        "SELECT id, handler_name, event_type, form_id, created_at
         FROM triggers
         WHERE form_id = ?1
         ORDER BY created_at, id",
    )?;

    let rows = stmt.query_map(params![form_id], |row| {
        let event_type: String = row.get(2)?;
        let event = event_type.parse::<TriggerEvent>().map_err(|err| {
            rusqlite::Error::FromSqlConversionFailure(2, Type::Text, err.into())
        })?;

        let created_ms: i64 = row.get(4)?;
        let created_at = DateTime::from_timestamp_millis(created_ms).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                Type::Integer,
                format!("timestamp out of range: {created_ms}").into(),
            )
        })?;

        Ok(Trigger {
            id: row.get(0)?,
            handler_name: row.get(1)?,
            event,
            form_id: row.get(3)?,
            created_at,
        })
    })?;

    rows.collect()
}

fn insert_trigger(conn: &SqliteConnection, trigger: &Trigger) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO triggers (id, handler_name, event_type, form_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            trigger.id,
            trigger.handler_name,
            trigger.event.as_str(),
            trigger.form_id,
            trigger.created_at.timestamp_millis()
        ],
    )?;
    Ok(())
}
