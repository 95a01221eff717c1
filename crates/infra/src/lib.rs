//! # FormGuest Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Database implementations (SQLite via r2d2)
//! - HTTP client implementation
//! - Google Calendar and Forms integrations
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `formguest-core`
//! - Contains all "impure" code (I/O, network, filesystem)

pub mod config;
pub mod database;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use database::{DbManager, SqlitePropertiesStore, SqliteTriggerRegistry};
pub use errors::InfraError;
pub use http::HttpClient;
pub use integrations::google::{
    AccessTokenProvider, GoogleApiClient, GoogleCalendarPlatform, GoogleFormsPlatform,
    StaticTokenProvider,
};
