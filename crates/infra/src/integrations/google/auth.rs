//! Access token sources for the Google APIs

use async_trait::async_trait;
use formguest_domain::{FormGuestError, GoogleConfig, Result};

/// Supplies a bearer token for each outgoing request
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String>;
}

/// A token fixed at startup, typically from `FORMGUEST_ACCESS_TOKEN`.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()) }
    }

    pub fn from_config(config: &GoogleConfig) -> Self {
        Self { token: config.access_token.clone().filter(|t| !t.trim().is_empty()) }
    }
}

impl std::fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String> {
        self.token
            .clone()
            .ok_or_else(|| FormGuestError::Auth("no Google access token configured".into()))
    }
}
