//! Calendar directory

use std::sync::Arc;

use formguest_domain::{CalendarSummary, Result};
use tracing::{debug, error};

use crate::calendar_ports::CalendarPlatform;

/// Lists and resolves calendars visible to the current user
#[derive(Clone)]
pub struct CalendarDirectory {
    platform: Arc<dyn CalendarPlatform>,
}

impl CalendarDirectory {
    pub fn new(platform: Arc<dyn CalendarPlatform>) -> Self {
        Self { platform }
    }

    /// All accessible calendars with the default calendar first.
    ///
    /// The remaining calendars keep the platform's order. Any failure yields
    /// an empty list: callers must read empty as "unavailable", not as "the
    /// user has no calendars".
    pub async fn list_calendars(&self) -> Vec<CalendarSummary> {
        match self.fetch_ordered().await {
            Ok(calendars) => calendars,
            Err(err) => {
                error!(error = %err, "failed to list calendars");
                Vec::new()
            }
        }
    }

    /// Resolve a calendar id. `Ok(None)` when the id is unknown.
    pub async fn resolve_calendar(&self, calendar_id: &str) -> Result<Option<CalendarSummary>> {
        self.platform.calendar_by_id(calendar_id).await
    }

    async fn fetch_ordered(&self) -> Result<Vec<CalendarSummary>> {
        let calendars = self.platform.list_calendars().await?;
        let default_id = self.platform.default_calendar_id().await?;
        debug!(count = calendars.len(), default_id = %default_id, "fetched calendars");
        Ok(default_first(calendars, &default_id))
    }
}

/// Move the calendar with `default_id` to the front, keeping the relative
/// order of everything else.
fn default_first(calendars: Vec<CalendarSummary>, default_id: &str) -> Vec<CalendarSummary> {
    let (mut ordered, others): (Vec<_>, Vec<_>) =
        calendars.into_iter().partition(|calendar| calendar.id == default_id);
    ordered.extend(others);
    ordered
}
