//! The persisted calendar/event binding

use serde::{Deserialize, Serialize};

/// The (calendar, event) pair that receives guests.
///
/// Only a fully present binding is representable. Reading a partial pair from
/// storage yields `None` from [`Binding::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub calendar_id: String,
    pub event_id: String,
}

impl Binding {
    pub fn new(calendar_id: impl Into<String>, event_id: impl Into<String>) -> Self {
        Self { calendar_id: calendar_id.into(), event_id: event_id.into() }
    }

    /// Combine two independently stored keys. Missing or empty values on
    /// either side mean "not configured".
    pub fn from_parts(calendar_id: Option<String>, event_id: Option<String>) -> Option<Self> {
        match (calendar_id, event_id) {
            (Some(calendar_id), Some(event_id))
                if !calendar_id.is_empty() && !event_id.is_empty() =>
            {
                Some(Self { calendar_id, event_id })
            }
            _ => None,
        }
    }
}
