//! Health report served by `GET /health`
//!
//! The process owns two things worth checking: the SQLite file holding the
//! binding and trigger registry, and the platform credentials. The service
//! is healthy only when every component is.

use serde::{Deserialize, Serialize};

/// Aggregated health of the running service
///
/// # Example
/// ```
/// use formguest_lib::utils::health::{ComponentHealth, HealthStatus};
///
/// let status = HealthStatus::from_components(vec![
///     ComponentHealth::healthy("database"),
///     ComponentHealth::unhealthy("google_credentials", "no access token configured"),
/// ]);
///
/// assert!(!status.is_healthy);
/// assert_eq!(status.failing(), vec!["google_credentials"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub is_healthy: bool,
    pub components: Vec<ComponentHealth>,
    /// Unix seconds at which the check ran.
    pub checked_at: i64,
}

impl HealthStatus {
    pub fn from_components(components: Vec<ComponentHealth>) -> Self {
        Self {
            is_healthy: components.iter().all(|c| c.is_healthy),
            components,
            checked_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Names of the components that failed their check.
    pub fn failing(&self) -> Vec<&str> {
        self.components.iter().filter(|c| !c.is_healthy).map(|c| c.name.as_str()).collect()
    }
}

/// Health of a single component
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentHealth {
    pub name: String,
    pub is_healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: true, message: None }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: false, message: Some(message.into()) }
    }
}
