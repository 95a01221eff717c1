use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use formguest_core::CalendarPlatform;
use formguest_domain::{CalendarSummary, EventSummary, FormGuestError, Result as DomainResult};

/// Arguments of one `search_events` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCall {
    pub calendar_id: String,
    pub query: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Default)]
struct State {
    calendars: Vec<CalendarSummary>,
    default_id: String,
    events: HashMap<String, Vec<EventSummary>>,
    guests: HashMap<(String, String), Vec<String>>,
    searches: Vec<SearchCall>,
    calls: usize,
    fail_listing: bool,
    fail_lookups: bool,
    fail_add_guest: bool,
}

/// In-memory hosted calendar.
///
/// Search matches `query` as a case-insensitive substring of the title and
/// only returns events starting inside the requested window.
#[derive(Default, Clone)]
pub struct FakeCalendarPlatform {
    state: Arc<Mutex<State>>,
}

impl FakeCalendarPlatform {
    pub fn new(calendars: Vec<CalendarSummary>, default_id: &str) -> Self {
        let fake = Self::default();
        {
            let mut state = fake.state.lock().unwrap();
            state.calendars = calendars;
            state.default_id = default_id.to_string();
        }
        fake
    }

    pub fn with_event(self, calendar_id: &str, event: EventSummary) -> Self {
        self.state
            .lock()
            .unwrap()
            .events
            .entry(calendar_id.to_string())
            .or_default()
            .push(event);
        self
    }

    pub fn fail_listing(&self) {
        self.state.lock().unwrap().fail_listing = true;
    }

    pub fn fail_lookups(&self) {
        self.state.lock().unwrap().fail_lookups = true;
    }

    pub fn fail_add_guest(&self) {
        self.state.lock().unwrap().fail_add_guest = true;
    }

    pub fn guests(&self, calendar_id: &str, event_id: &str) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .guests
            .get(&(calendar_id.to_string(), event_id.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    /// Number of platform calls made so far, of any kind.
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    pub fn searches(&self) -> Vec<SearchCall> {
        self.state.lock().unwrap().searches.clone()
    }
}

fn unavailable() -> FormGuestError {
    FormGuestError::Platform("calendar service unavailable".into())
}

#[async_trait]
impl CalendarPlatform for FakeCalendarPlatform {
    async fn list_calendars(&self) -> DomainResult<Vec<CalendarSummary>> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if state.fail_listing {
            return Err(unavailable());
        }
        Ok(state.calendars.clone())
    }

    async fn default_calendar_id(&self) -> DomainResult<String> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if state.fail_listing {
            return Err(unavailable());
        }
        Ok(state.default_id.clone())
    }

    async fn calendar_by_id(&self, calendar_id: &str) -> DomainResult<Option<CalendarSummary>> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if state.fail_lookups {
            return Err(unavailable());
        }
        Ok(state.calendars.iter().find(|c| c.id == calendar_id).cloned())
    }

    async fn search_events(
        &self,
        calendar_id: &str,
        query: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<EventSummary>> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        state.searches.push(SearchCall {
            calendar_id: calendar_id.to_string(),
            query: query.to_string(),
            start,
            end,
        });
        if state.fail_lookups {
            return Err(unavailable());
        }

        let needle = query.to_lowercase();
        Ok(state
            .events
            .get(calendar_id)
            .map(|events| {
                events
                    .iter()
                    .filter(|e| e.start_time >= start && e.start_time < end)
                    .filter(|e| e.title.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn event_by_id(
        &self,
        calendar_id: &str,
        event_id: &str,
    ) -> DomainResult<Option<EventSummary>> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if state.fail_lookups {
            return Err(unavailable());
        }
        Ok(state
            .events
            .get(calendar_id)
            .and_then(|events| events.iter().find(|e| e.id == event_id))
            .cloned())
    }

    async fn add_guest(&self, calendar_id: &str, event_id: &str, email: &str) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if state.fail_add_guest {
            return Err(FormGuestError::Platform("guest limit reached".into()));
        }
        state
            .guests
            .entry((calendar_id.to_string(), event_id.to_string()))
            .or_default()
            .push(email.to_string());
        Ok(())
    }
}
