//! FormGuest - adds form respondents to a calendar event's guest list
//!
//! Main entry point for the HTTP service.

use std::sync::Arc;

use anyhow::Context;
use formguest_lib::utils::logging::init_tracing;
use formguest_lib::{serve, AppContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    init_tracing();

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env file loaded"),
    }

    let config = formguest_infra::config::load().context("failed to load configuration")?;
    let ctx = Arc::new(AppContext::new(config).context("failed to initialise application")?);

    serve(ctx).await
}
