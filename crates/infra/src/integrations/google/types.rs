//! Wire types for the Google Calendar v3 and Forms v1 APIs
//!
//! Only the fields the adapters read are modelled; attendees keep every
//! other field so a guest-list patch does not drop RSVP state.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use formguest_domain::{CalendarSummary, EventSummary};
use serde::{Deserialize, Serialize};

// ============================================================================
// Calendar v3
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarListResponse {
    #[serde(default)]
    pub items: Vec<CalendarListEntry>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarListEntry {
    pub id: String,
    pub summary: Option<String>,
    pub summary_override: Option<String>,
}

impl From<CalendarListEntry> for CalendarSummary {
    fn from(entry: CalendarListEntry) -> Self {
        let name = entry.summary_override.or(entry.summary).unwrap_or_else(|| entry.id.clone());
        CalendarSummary { id: entry.id, name }
    }
}

/// `calendars/{calendarId}` resource
#[derive(Debug, Deserialize)]
pub struct CalendarResource {
    pub id: String,
    pub summary: Option<String>,
}

impl From<CalendarResource> for CalendarSummary {
    fn from(calendar: CalendarResource) -> Self {
        let name = calendar.summary.unwrap_or_else(|| calendar.id.clone());
        CalendarSummary { id: calendar.id, name }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    #[serde(default)]
    pub items: Vec<GoogleEvent>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleEvent {
    pub id: String,
    #[serde(default)]
    pub etag: Option<String>,
    pub summary: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub start: EventDateTime,
    #[serde(default)]
    pub end: EventDateTime,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
}

impl GoogleEvent {
    /// Deleted events can still be fetched by id with status `cancelled`.
    pub fn is_cancelled(&self) -> bool {
        self.status.as_deref() == Some("cancelled")
    }

    pub fn has_attendee(&self, email: &str) -> bool {
        self.attendees.iter().any(|a| a.email.eq_ignore_ascii_case(email))
    }

    /// `None` when either end has no usable timestamp.
    pub fn to_summary(&self) -> Option<EventSummary> {
        Some(EventSummary {
            id: self.id.clone(),
            title: self.summary.clone().unwrap_or_default(),
            start_time: self.start.to_utc()?,
            end_time: self.end.to_utc()?,
        })
    }
}

/// Either a timed instant or an all-day date
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    pub date_time: Option<DateTime<FixedOffset>>,
    pub date: Option<NaiveDate>,
}

impl EventDateTime {
    /// All-day dates resolve to midnight UTC.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match (self.date_time, self.date) {
            (Some(instant), _) => Some(instant.with_timezone(&Utc)),
            (None, Some(date)) => date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc()),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendee {
    pub email: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Attendee {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into(), extra: serde_json::Map::new() }
    }
}

/// Body of `PATCH events/{eventId}` when only the guest list changes
#[derive(Debug, Serialize)]
pub struct AttendeesPatch<'a> {
    pub attendees: &'a [Attendee],
}

// ============================================================================
// Forms v1
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub form_id: String,
    #[serde(default)]
    pub settings: FormSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSettings {
    pub email_collection_type: Option<EmailCollectionType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailCollectionType {
    EmailCollectionTypeUnspecified,
    DoNotCollect,
    Verified,
    ResponderInput,
    #[serde(other)]
    Unknown,
}

impl EmailCollectionType {
    pub fn collects_emails(self) -> bool {
        matches!(self, Self::Verified | Self::ResponderInput)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPublishSettingsRequest {
    pub publish_settings: PublishSettings,
    pub update_mask: &'static str,
}

impl SetPublishSettingsRequest {
    pub fn accepting_responses(enabled: bool) -> Self {
        Self {
            publish_settings: PublishSettings {
                publish_state: PublishState { is_accepting_responses: enabled },
            },
            update_mask: "publishState.isAcceptingResponses",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishSettings {
    pub publish_state: PublishState,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishState {
    pub is_accepting_responses: bool,
}
