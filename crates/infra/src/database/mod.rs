//! Database implementations

pub mod manager;
pub mod pool;
pub mod properties_repository;
pub mod trigger_repository;

pub use manager::DbManager;
pub use pool::{create_sqlite_pool, SqliteConnection, SqlitePool};
pub use properties_repository::SqlitePropertiesStore;
pub use trigger_repository::SqliteTriggerRegistry;
