//! Properties store port
//!
//! A durable key-value namespace scoped to this deployment. Only the
//! configuration manager writes to it.

use async_trait::async_trait;
use formguest_domain::Result;

/// Trait for the key-value store holding the binding
#[async_trait]
pub trait PropertiesStore: Send + Sync {
    /// Read a single property.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write several properties in one call.
    async fn set_all(&self, properties: &[(&str, &str)]) -> Result<()>;

    /// Remove every property in the namespace.
    async fn delete_all(&self) -> Result<()>;
}
