#![allow(dead_code)]

use std::sync::Arc;

use formguest_infra::database::DbManager;
use formguest_infra::{GoogleApiClient, HttpClient, StaticTokenProvider};
use tempfile::TempDir;

pub const TEST_TOKEN: &str = "ya29.test-token";

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new temporary database with migrations applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let manager =
            DbManager::new(temp_dir.path().join("test.db"), 2).expect("db manager should be created");
        manager.run_migrations().expect("schema migrations should apply");

        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }
}

/// Google client authenticated with [`TEST_TOKEN`].
pub fn google_client() -> GoogleApiClient {
    GoogleApiClient::new(
        HttpClient::new().expect("http client"),
        Arc::new(StaticTokenProvider::new(TEST_TOKEN)),
    )
}
