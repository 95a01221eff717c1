//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Properties store keys
pub const CALENDAR_ID_KEY: &str = "calendarId";
pub const EVENT_ID_KEY: &str = "eventId";

// Trigger registration
pub const HANDLER_NAME: &str = "onFormSubmit";

// Event search window (days ahead of "now")
pub const SEARCH_WINDOW_DAYS: i64 = 365;

// Linked event lookup messages surfaced to the dialog
pub const LINKED_CALENDAR_NOT_FOUND: &str = "Linked calendar not found.";
pub const LINKED_EVENT_NOT_FOUND: &str = "Linked event not found.";

// Display format for the linked event, e.g. "Friday, March 6, 14:00 - 15:30"
pub const EVENT_DAY_FORMAT: &str = "%A, %B %-d";
pub const EVENT_CLOCK_FORMAT: &str = "%H:%M";
