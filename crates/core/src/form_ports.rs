//! Form platform port

use async_trait::async_trait;
use formguest_domain::Result;

/// Live settings of the active form
#[async_trait]
pub trait FormPlatform: Send + Sync {
    /// Whether the form currently collects respondent emails. Never cached.
    async fn collects_emails(&self) -> Result<bool>;

    /// Open or close the form for new responses.
    async fn set_accepting_responses(&self, enabled: bool) -> Result<()>;
}
