//! Payloads returned to the management dialog
//!
//! The dialog distinguishes three response shapes (success-with-status,
//! success-with-error, bare error), carried by four variants:
//!
//! | Variant        | JSON                                                       |
//! |----------------|------------------------------------------------------------|
//! | `Configured`   | `{isConfigured: true, linkedCalendarName, linkedEventTitle, linkedEventTime, formCollectsEmails}` |
//! | `Unconfigured` | `{isConfigured: false, allCalendars, errorMessage?}`       |
//! | `ServerError`  | `{isConfigured: false, errorMessage}`                      |
//! | `BareError`    | `{errorMessage}`                                           |
//!
//! `BareError` deliberately lacks `isConfigured`; it is what a failed save
//! returns, and the UI renders it differently from a status error.

use serde::{Deserialize, Serialize};

use super::calendar::{CalendarSummary, LinkedEventDetails};

/// Status of the form/event binding as shown to the operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DialogDataWire", try_from = "DialogDataWire")]
pub enum DialogData {
    Configured { linked: LinkedEventDetails, form_collects_emails: bool },
    Unconfigured { all_calendars: Vec<CalendarSummary>, error_message: Option<String> },
    ServerError { error_message: String },
    BareError { error_message: String },
}

impl DialogData {
    pub fn unconfigured(all_calendars: Vec<CalendarSummary>) -> Self {
        Self::Unconfigured { all_calendars, error_message: None }
    }

    /// `isConfigured`, or `None` for the bare error shape.
    pub fn is_configured(&self) -> Option<bool> {
        match self {
            Self::Configured { .. } => Some(true),
            Self::Unconfigured { .. } | Self::ServerError { .. } => Some(false),
            Self::BareError { .. } => None,
        }
    }

    /// Whether the operation behind this payload failed outright.
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::ServerError { .. } | Self::BareError { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Configured { .. } => None,
            Self::Unconfigured { error_message, .. } => error_message.as_deref(),
            Self::ServerError { error_message } | Self::BareError { error_message } => {
                Some(error_message)
            }
        }
    }
}

/// Flat JSON representation shared by all variants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DialogDataWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    is_configured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    all_calendars: Option<Vec<CalendarSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    linked_calendar_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    linked_event_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    linked_event_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    form_collects_emails: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl From<DialogData> for DialogDataWire {
    fn from(value: DialogData) -> Self {
        match value {
            DialogData::Configured { linked, form_collects_emails } => Self {
                is_configured: Some(true),
                linked_calendar_name: Some(linked.calendar_name),
                linked_event_title: Some(linked.event_title),
                linked_event_time: Some(linked.event_time),
                form_collects_emails: Some(form_collects_emails),
                ..Self::default()
            },
            DialogData::Unconfigured { all_calendars, error_message } => Self {
                is_configured: Some(false),
                all_calendars: Some(all_calendars),
                error_message,
                ..Self::default()
            },
            DialogData::ServerError { error_message } => Self {
                is_configured: Some(false),
                error_message: Some(error_message),
                ..Self::default()
            },
            DialogData::BareError { error_message } => {
                Self { error_message: Some(error_message), ..Self::default() }
            }
        }
    }
}

impl TryFrom<DialogDataWire> for DialogData {
    type Error = String;

    fn try_from(wire: DialogDataWire) -> Result<Self, String> {
        match wire.is_configured {
            Some(true) => {
                let (Some(calendar_name), Some(event_title), Some(event_time)) =
                    (wire.linked_calendar_name, wire.linked_event_title, wire.linked_event_time)
                else {
                    return Err("configured status is missing linked event fields".into());
                };
                Ok(Self::Configured {
                    linked: LinkedEventDetails { calendar_name, event_title, event_time },
                    form_collects_emails: wire.form_collects_emails.unwrap_or(false),
                })
            }
            Some(false) => match (wire.all_calendars, wire.error_message) {
                (Some(all_calendars), error_message) => {
                    Ok(Self::Unconfigured { all_calendars, error_message })
                }
                (None, Some(error_message)) => Ok(Self::ServerError { error_message }),
                (None, None) => Err("unconfigured status is missing allCalendars".into()),
            },
            None => wire
                .error_message
                .map(|error_message| Self::BareError { error_message })
                .ok_or_else(|| "dialog data has neither isConfigured nor errorMessage".into()),
        }
    }
}
