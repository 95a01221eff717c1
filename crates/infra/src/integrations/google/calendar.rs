//! Google Calendar v3 adapter

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use formguest_core::CalendarPlatform;
use formguest_domain::{CalendarSummary, EventSummary, FormGuestError, Result};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::client::GoogleApiClient;
use super::types::{
    Attendee, AttendeesPatch, CalendarListResponse, CalendarResource, EventsResponse, GoogleEvent,
};

const PAGE_SIZE: &str = "250";

/// Re-reads allowed when the event keeps changing under a guest-list patch.
const MAX_GUEST_CONFLICTS: usize = 5;

type EventKey = (String, String);

/// Calendar v3 adapter
///
/// The attendee list is replaced wholesale on PATCH. Guest additions to the
/// same event are serialised in-process and guarded by the event etag, so a
/// concurrent writer forces a re-read instead of losing a guest.
pub struct GoogleCalendarPlatform {
    api: GoogleApiClient,
    base_url: String,
    guest_locks: Mutex<HashMap<EventKey, Arc<Mutex<()>>>>,
}

impl GoogleCalendarPlatform {
    pub fn new(api: GoogleApiClient, base_url: impl Into<String>) -> Self {
        Self {
            api,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            guest_locks: Mutex::new(HashMap::new()),
        }
    }

    async fn guest_lock(&self, key: &EventKey) -> Arc<Mutex<()>> {
        let mut locks = self.guest_locks.lock().await;
        Arc::clone(locks.entry(key.clone()).or_default())
    }

    /// Drop the per-event lock once nobody else holds or waits on it.
    async fn release_guest_lock(&self, key: &EventKey, lock: Arc<Mutex<()>>) {
        let mut locks = self.guest_locks.lock().await;
        if Arc::strong_count(&lock) == 2 {
            locks.remove(key);
        }
    }

    async fn patch_in_guest(&self, calendar_id: &str, event_id: &str, email: &str) -> Result<()> {
        let url = self.event_url(calendar_id, event_id);

        for attempt in 1..=MAX_GUEST_CONFLICTS {
            let event = self
                .fetch_event(calendar_id, event_id)
                .await?
                .ok_or_else(|| FormGuestError::NotFound(format!("event {event_id}")))?;

            if event.has_attendee(email) {
                debug!(calendar_id, event_id, "respondent is already a guest");
                return Ok(());
            }

            let mut attendees = event.attendees;
            attendees.push(Attendee::new(email));
            let patch = AttendeesPatch { attendees: &attendees };

            let updated: Option<GoogleEvent> =
                self.api.patch_if_match(&url, event.etag.as_deref(), &patch).await?;
            if updated.is_some() {
                info!(calendar_id, event_id, guests = attendees.len(), "event guest list updated");
                return Ok(());
            }

            warn!(calendar_id, event_id, attempt, "event changed during guest update; re-reading");
        }

        Err(FormGuestError::Platform(format!(
            "event {event_id} changed {MAX_GUEST_CONFLICTS} times while adding a guest"
        )))
    }

    fn calendar_url(&self, calendar_id: &str) -> String {
        format!("{}/calendars/{}", self.base_url, urlencoding::encode(calendar_id))
    }

    fn event_url(&self, calendar_id: &str, event_id: &str) -> String {
        format!("{}/events/{}", self.calendar_url(calendar_id), urlencoding::encode(event_id))
    }

    /// Fetch an event, treating missing and cancelled events as absent.
    async fn fetch_event(&self, calendar_id: &str, event_id: &str) -> Result<Option<GoogleEvent>> {
        let event: GoogleEvent = match self.api.get(&self.event_url(calendar_id, event_id), &[]).await
        {
            Ok(event) => event,
            Err(FormGuestError::NotFound(_)) => return Ok(None),
            Err(err) => return Err(err),
        };

        if event.is_cancelled() {
            debug!(calendar_id, event_id, "event is cancelled");
            return Ok(None);
        }
        Ok(Some(event))
    }
}

#[async_trait]
impl CalendarPlatform for GoogleCalendarPlatform {
    async fn list_calendars(&self) -> Result<Vec<CalendarSummary>> {
        let url = format!("{}/users/me/calendarList", self.base_url);
        let mut calendars = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![("maxResults", PAGE_SIZE.to_string())];
            if let Some(token) = page_token.take() {
                query.push(("pageToken", token));
            }

            let page: CalendarListResponse = self.api.get(&url, &query).await?;
            calendars.extend(page.items.into_iter().map(CalendarSummary::from));

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(count = calendars.len(), "fetched calendar list");
        Ok(calendars)
    }

    async fn default_calendar_id(&self) -> Result<String> {
        let primary: CalendarResource = self.api.get(&self.calendar_url("primary"), &[]).await?;
        Ok(primary.id)
    }

    async fn calendar_by_id(&self, calendar_id: &str) -> Result<Option<CalendarSummary>> {
        match self.api.get::<CalendarResource>(&self.calendar_url(calendar_id), &[]).await {
            Ok(calendar) => Ok(Some(calendar.into())),
            Err(FormGuestError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn search_events(
        &self,
        calendar_id: &str,
        query: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<EventSummary>> {
        let url = format!("{}/events", self.calendar_url(calendar_id));
        let mut params = vec![
            ("timeMin", start.to_rfc3339_opts(SecondsFormat::Secs, true)),
            ("timeMax", end.to_rfc3339_opts(SecondsFormat::Secs, true)),
            ("singleEvents", "true".to_string()),
            ("orderBy", "startTime".to_string()),
            ("maxResults", PAGE_SIZE.to_string()),
        ];
        if !query.is_empty() {
            params.push(("q", query.to_string()));
        }

        let mut events = Vec::new();
        loop {
            let page: EventsResponse = self.api.get(&url, &params).await?;
            events.extend(
                page.items.iter().filter(|e| !e.is_cancelled()).filter_map(GoogleEvent::to_summary),
            );

            match page.next_page_token {
                Some(token) => {
                    params.retain(|(key, _)| *key != "pageToken");
                    params.push(("pageToken", token));
                }
                None => break,
            }
        }

        debug!(calendar_id, query, count = events.len(), "event search complete");
        Ok(events)
    }

    async fn event_by_id(&self, calendar_id: &str, event_id: &str) -> Result<Option<EventSummary>> {
        let Some(event) = self.fetch_event(calendar_id, event_id).await? else {
            return Ok(None);
        };

        let summary = event.to_summary();
        if summary.is_none() {
            warn!(calendar_id, event_id, "event has no usable start or end time");
        }
        Ok(summary)
    }

    async fn add_guest(&self, calendar_id: &str, event_id: &str, email: &str) -> Result<()> {
        let key = (calendar_id.to_string(), event_id.to_string());
        let lock = self.guest_lock(&key).await;

        let result = {
            let _guard = lock.lock().await;
            self.patch_in_guest(calendar_id, event_id, email).await
        };

        self.release_guest_lock(&key, lock).await;
        result
    }
}
