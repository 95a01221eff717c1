//! Configuration management

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::{FormGuestError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    pub google: GoogleConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: "127.0.0.1:8080".to_string() }
    }
}

/// SQLite storage for the binding and trigger registry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: "formguest.db".to_string(), pool_size: 4 }
    }
}

/// Hosted platform access
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    /// The active form whose submissions are bound to the event.
    pub form_id: String,
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    #[serde(default = "default_calendar_api_base")]
    pub calendar_api_base: String,
    #[serde(default = "default_forms_api_base")]
    pub forms_api_base: String,
}

fn default_calendar_api_base() -> String {
    "https://www.googleapis.com/calendar/v3".to_string()
}

fn default_forms_api_base() -> String {
    "https://forms.googleapis.com/v1".to_string()
}

/// How linked event times are rendered for the operator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// IANA zone name, e.g. `Europe/Vienna`.
    pub time_zone: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { time_zone: "UTC".to_string() }
    }
}

impl DisplayConfig {
    /// Parse the configured zone name.
    pub fn tz(&self) -> Result<Tz> {
        self.time_zone.parse::<Tz>().map_err(|e| {
            FormGuestError::Config(format!("Invalid time zone '{}': {}", self.time_zone, e))
        })
    }
}

/// Outbound HTTP behaviour
///
/// Platform calls are made once; there is no retry layer. A timeout is only
/// applied when explicitly configured.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_secs: Option<u64>,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self::new(String::new(), None)
    }
}

impl GoogleConfig {
    /// Build a Google config with default API bases.
    pub fn new(form_id: impl Into<String>, access_token: Option<String>) -> Self {
        Self {
            form_id: form_id.into(),
            access_token,
            calendar_api_base: default_calendar_api_base(),
            forms_api_base: default_forms_api_base(),
        }
    }
}
