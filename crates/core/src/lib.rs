//! # FormGuest Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the hosted calendar, the form, the
//!   properties store and the trigger registry
//! - The calendar directory and event resolver
//! - The configuration manager and trigger installation protocol
//! - The submission handler and its trigger dispatcher
//!
//! ## Architecture Principles
//! - Only depends on `formguest-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod binding;
pub mod calendar;
pub mod clock;
pub mod dialog;
pub mod submission;

// Ports
pub mod calendar_ports;
pub mod form_ports;
pub mod properties_ports;
pub mod trigger_ports;

pub use binding::ConfigurationManager;
pub use calendar::{CalendarDirectory, EventResolver};
pub use calendar_ports::CalendarPlatform;
pub use clock::{Clock, FixedClock, SystemClock};
pub use dialog::DialogDataAssembler;
pub use form_ports::FormPlatform;
pub use properties_ports::PropertiesStore;
pub use submission::{DispatchOutcome, SubmissionHandler, TriggerDispatcher};
pub use trigger_ports::TriggerRegistry;
