//! Domain types and models

pub mod binding;
pub mod calendar;
pub mod dialog;
pub mod submission;
pub mod trigger;

pub use binding::Binding;
pub use calendar::{CalendarSummary, EventSummary, LinkedEventDetails, LinkedEventOutcome};
pub use dialog::DialogData;
pub use submission::FormSubmission;
pub use trigger::{Trigger, TriggerEvent};
