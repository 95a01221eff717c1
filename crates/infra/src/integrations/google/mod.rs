//! Google Workspace integration
//!
//! Adapters for the Calendar v3 and Forms v1 REST APIs:
//! - `GoogleCalendarPlatform` implements the calendar port
//! - `GoogleFormsPlatform` implements the form port
//!
//! Both authenticate with a bearer token from an [`AccessTokenProvider`].

pub mod auth;
pub mod calendar;
pub mod client;
pub mod forms;
pub mod types;

pub use auth::{AccessTokenProvider, StaticTokenProvider};
pub use calendar::GoogleCalendarPlatform;
pub use client::GoogleApiClient;
pub use forms::GoogleFormsPlatform;
