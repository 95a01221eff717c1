//! # FormGuest Domain
//!
//! Business domain types and models for FormGuest.
//!
//! This crate contains:
//! - The binding between a form and a calendar event
//! - Read-only projections of calendars and events
//! - The dialog payload shapes consumed by the management UI
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other FormGuest crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
