//! Form submission handling
//!
//! The dispatcher decides whether a submission is routed at all; the handler
//! adds the respondent to the bound event.

pub mod dispatcher;
pub mod handler;

pub use dispatcher::{DispatchOutcome, TriggerDispatcher};
pub use handler::SubmissionHandler;
