//! HTTP commands - dialog and platform bridge to the core services

mod calendar;
mod configuration;
mod health;
mod submission;

pub use calendar::*;
pub use configuration::*;
pub use health::*;
pub use submission::*;
