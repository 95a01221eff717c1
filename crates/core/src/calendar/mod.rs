//! Calendar directory and event resolver
//!
//! Both degrade to empty results on platform failure so the dialog always has
//! something to render; see [`CalendarDirectory::list_calendars`] and
//! [`EventResolver::search`].

pub mod directory;
pub mod resolver;

pub use directory::CalendarDirectory;
pub use resolver::{format_event_time, EventResolver};
