//! HTTP surface: dialog endpoints and the submission webhook

pub mod error;

use std::sync::Arc;

use anyhow::Context;
use axum::routing::{get, post, put};
use axum::Router;
use tracing::info;

use crate::commands;
use crate::context::AppContext;

pub use error::ApiError;

/// Build the application router.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/api/status", get(commands::get_status))
        .route(
            "/api/configuration",
            post(commands::save_configuration).delete(commands::reset_configuration),
        )
        .route("/api/form/accepting-responses", put(commands::set_accepting_responses))
        .route("/api/calendars", get(commands::list_calendars))
        .route("/api/calendars/{calendar_id}/events", get(commands::search_events))
        .route("/api/dialog", get(commands::get_dialog_data))
        .route("/hooks/form-submit", post(commands::form_submitted))
        .route("/health", get(commands::get_app_health))
        .with_state(ctx)
}

/// Bind `server.bind_addr` and serve until Ctrl+C.
pub async fn serve(ctx: Arc<AppContext>) -> anyhow::Result<()> {
    let addr = ctx.config.server.bind_addr.clone();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(addr = %addr, "formguest listening");

    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received shutdown signal"),
        Err(err) => tracing::error!(error = %err, "failed to listen for shutdown signal"),
    }
}
