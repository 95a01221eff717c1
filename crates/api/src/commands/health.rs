//! Health check command for deployment probes

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::context::AppContext;
use crate::utils::health::HealthStatus;

/// Get application health status
///
/// Responds `200` when every component is healthy, `503` otherwise.
///
/// # Example Response
/// ```json
/// {
///   "isHealthy": true,
///   "components": [
///     { "name": "database", "isHealthy": true },
///     { "name": "google_credentials", "isHealthy": true }
///   ],
///   "checkedAt": 1792315200
/// }
/// ```
pub async fn get_app_health(
    State(ctx): State<Arc<AppContext>>,
) -> (StatusCode, Json<HealthStatus>) {
    let status = ctx.health_check().await;
    let code = if status.is_healthy { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (code, Json(status))
}
