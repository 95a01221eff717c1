//! Read-only projections of hosted calendars and events
//!
//! None of these are persisted. They are fetched from the calendar platform
//! on demand and handed to the dialog or the submission handler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar the current user can access
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSummary {
    pub id: String,
    pub name: String,
}

impl CalendarSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// A calendar event returned from a search or a direct lookup
///
/// Timestamps serialize as RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: String,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Human-readable description of the bound event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedEventDetails {
    pub calendar_name: String,
    pub event_title: String,
    /// e.g. `"Friday, March 6, 14:00 - 15:30"`
    pub event_time: String,
}

/// Result of dereferencing a binding
///
/// Not-found conditions are data, not errors: they serialize as
/// `{"error": "..."}` next to the success shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkedEventOutcome {
    Details(LinkedEventDetails),
    Error { error: String },
}

impl LinkedEventOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error { error: message.into() }
    }
}
