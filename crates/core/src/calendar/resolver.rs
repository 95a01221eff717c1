//! Event search and linked event description

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use formguest_domain::constants::{
    EVENT_CLOCK_FORMAT, EVENT_DAY_FORMAT, LINKED_CALENDAR_NOT_FOUND, LINKED_EVENT_NOT_FOUND,
    SEARCH_WINDOW_DAYS,
};
use formguest_domain::{EventSummary, LinkedEventDetails, LinkedEventOutcome, Result};
use tracing::{error, warn};

use super::directory::CalendarDirectory;
use crate::calendar_ports::CalendarPlatform;
use crate::clock::Clock;

/// Finds events for the dialog and dereferences the bound event
#[derive(Clone)]
pub struct EventResolver {
    platform: Arc<dyn CalendarPlatform>,
    directory: CalendarDirectory,
    clock: Arc<dyn Clock>,
    time_zone: Tz,
}

impl EventResolver {
    pub fn new(
        platform: Arc<dyn CalendarPlatform>,
        clock: Arc<dyn Clock>,
        time_zone: Tz,
    ) -> Self {
        let directory = CalendarDirectory::new(Arc::clone(&platform));
        Self { platform, directory, clock, time_zone }
    }

    /// Search `[now, now + 1 year)` for events matching `query`.
    ///
    /// A blank calendar id returns an empty list without calling the
    /// platform. Platform failures are logged and also yield an empty list.
    pub async fn search(&self, calendar_id: &str, query: &str) -> Vec<EventSummary> {
        if calendar_id.trim().is_empty() {
            return Vec::new();
        }

        let start = self.clock.now();
        let end = start + Duration::days(SEARCH_WINDOW_DAYS);

        match self.platform.search_events(calendar_id, query, start, end).await {
            Ok(events) => events,
            Err(err) => {
                error!(calendar_id, query, error = %err, "event search failed");
                Vec::new()
            }
        }
    }

    /// Resolve the bound pair to displayable details.
    ///
    /// Missing calendars and events are reported as data. Platform faults are
    /// rewrapped as `"Could not retrieve event details: <message>"`.
    pub async fn describe(&self, calendar_id: &str, event_id: &str) -> LinkedEventOutcome {
        match self.lookup(calendar_id, event_id).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(calendar_id, event_id, error = %err, "failed to describe linked event");
                LinkedEventOutcome::error(format!("Could not retrieve event details: {err}"))
            }
        }
    }

    async fn lookup(&self, calendar_id: &str, event_id: &str) -> Result<LinkedEventOutcome> {
        let Some(calendar) = self.directory.resolve_calendar(calendar_id).await? else {
            warn!(calendar_id, "linked calendar not found");
            return Ok(LinkedEventOutcome::error(LINKED_CALENDAR_NOT_FOUND));
        };

        let Some(event) = self.platform.event_by_id(calendar_id, event_id).await? else {
            warn!(calendar_id, event_id, "linked event not found");
            return Ok(LinkedEventOutcome::error(LINKED_EVENT_NOT_FOUND));
        };

        Ok(LinkedEventOutcome::Details(LinkedEventDetails {
            calendar_name: calendar.name,
            event_time: format_event_time(event.start_time, event.end_time, self.time_zone),
            event_title: event.title,
        }))
    }
}

/// Render an event's time range, e.g. `"Friday, March 6, 14:00 - 15:30"`.
///
/// Both ends are converted to `time_zone` and shown in 24-hour time.
pub fn format_event_time(start: DateTime<Utc>, end: DateTime<Utc>, time_zone: Tz) -> String {
    let start = start.with_timezone(&time_zone);
    let end = end.with_timezone(&time_zone);
    format!(
        "{}, {} - {}",
        start.format(EVENT_DAY_FORMAT),
        start.format(EVENT_CLOCK_FORMAT),
        end.format(EVENT_CLOCK_FORMAT)
    )
}
