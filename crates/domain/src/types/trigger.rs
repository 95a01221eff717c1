//! Trigger registrations
//!
//! A trigger associates a handler name with a platform event on the active
//! form. At most one trigger per handler name is kept live.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::impl_wire_name_conversions;

/// Platform events a trigger can listen to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerEvent {
    FormSubmit,
}

impl_wire_name_conversions!(TriggerEvent {
    FormSubmit => "formSubmit",
});

/// An installed trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    pub id: String,
    pub handler_name: String,
    pub event: TriggerEvent,
    pub form_id: String,
    pub created_at: DateTime<Utc>,
}

impl Trigger {
    /// Whether this trigger routes `event` to `handler_name`.
    pub fn matches(&self, handler_name: &str, event: TriggerEvent) -> bool {
        self.handler_name == handler_name && self.event == event
    }
}
