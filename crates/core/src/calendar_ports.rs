//! Calendar platform port
//!
//! The hosted calendar is an external collaborator. Everything the directory,
//! the resolver and the submission handler need from it goes through this
//! trait so tests can substitute an in-memory calendar.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use formguest_domain::{CalendarSummary, EventSummary, Result};

/// Trait for hosted calendar operations
///
/// Lookups return `Ok(None)` when the platform reports the id as unknown;
/// `Err` is reserved for transport and platform faults.
#[async_trait]
pub trait CalendarPlatform: Send + Sync {
    /// All calendars visible to the current user, in platform order.
    async fn list_calendars(&self) -> Result<Vec<CalendarSummary>>;

    /// Identifier of the user's default calendar.
    async fn default_calendar_id(&self) -> Result<String>;

    /// Resolve a calendar id to a handle.
    async fn calendar_by_id(&self, calendar_id: &str) -> Result<Option<CalendarSummary>>;

    /// Events in `[start, end)` whose title matches `query`. An empty query
    /// matches every event in the window.
    async fn search_events(
        &self,
        calendar_id: &str,
        query: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<EventSummary>>;

    /// Resolve an event id within a calendar.
    async fn event_by_id(&self, calendar_id: &str, event_id: &str)
        -> Result<Option<EventSummary>>;

    /// Add `email` to the event's guest list.
    async fn add_guest(&self, calendar_id: &str, event_id: &str, email: &str) -> Result<()>;
}
