//! Binding configuration
//!
//! Reading and writing the persisted calendar/event pair, deriving the
//! dialog status from it, and keeping the submission trigger in step.

pub mod manager;
pub mod triggers;

pub use manager::{read_binding, ConfigurationManager};
pub use triggers::{install_submission_trigger, remove_submission_triggers};
