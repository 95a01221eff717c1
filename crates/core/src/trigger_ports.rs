//! Trigger registry port
//!
//! Trigger registration is a side-effecting registry owned by the platform.
//! The configuration manager keeps at most one live trigger per handler name
//! by deleting matches before creating a new one.

use async_trait::async_trait;
use formguest_domain::{Result, Trigger, TriggerEvent};

/// Capability interface over the platform trigger registry
#[async_trait]
pub trait TriggerRegistry: Send + Sync {
    /// Triggers owned by the current user on the active form.
    async fn list(&self) -> Result<Vec<Trigger>>;

    /// Remove a trigger by id. Unknown ids are not an error.
    async fn delete(&self, trigger_id: &str) -> Result<()>;

    /// Register `handler_name` for `event` on the active form.
    async fn create(&self, handler_name: &str, event: TriggerEvent) -> Result<Trigger>;
}
