#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use formguest_core::FixedClock;
use formguest_domain::{Config, DatabaseConfig, GoogleConfig};
use formguest_lib::{router, AppContext};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::MockServer;

pub const FORM_ID: &str = "form-1";
pub const TEST_TOKEN: &str = "ya29.test-token";

/// Config whose Google API bases point at `server`.
pub fn test_config(server: &MockServer, temp_dir: &TempDir) -> Config {
    let mut google = GoogleConfig::new(FORM_ID, Some(TEST_TOKEN.to_string()));
    google.calendar_api_base = server.uri();
    google.forms_api_base = server.uri();

    Config {
        database: DatabaseConfig {
            path: temp_dir.path().join("formguest.db").to_string_lossy().to_string(),
            pool_size: 2,
        },
        google,
        ..Config::default()
    }
}

/// Application wired against a mocked Google API, clock fixed at
/// 2026-03-01 09:00 UTC.
pub struct TestApp {
    pub ctx: Arc<AppContext>,
    pub server: MockServer,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn start() -> Self {
        Self::start_with(|_| {}).await
    }

    pub async fn start_with(adjust: impl FnOnce(&mut Config)) -> Self {
        let server = MockServer::start().await;
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let mut config = test_config(&server, &temp_dir);
        adjust(&mut config);

        let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()));
        let ctx = AppContext::with_clock(config, clock).expect("context should build");

        Self { ctx: Arc::new(ctx), server, _temp_dir: temp_dir }
    }

    pub fn router(&self) -> Router {
        router(Arc::clone(&self.ctx))
    }

    /// Send one request through the router and decode the JSON body.
    pub async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        let response = self.router().oneshot(request).await.expect("router should respond");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body should be JSON")
        };
        (status, json)
    }

    /// Send a raw body to the webhook.
    pub async fn post_raw(&self, uri: &str, body: &'static str) -> StatusCode {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .expect("request should build");
        self.router().oneshot(request).await.expect("router should respond").status()
    }
}
