//! Calendar picker commands

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::Json;
use formguest_domain::{CalendarSummary, EventSummary};
use serde::Deserialize;
use tracing::info;

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Query string for event search
#[derive(Debug, Default, Deserialize)]
pub struct EventSearchQuery {
    #[serde(default)]
    pub query: String,
}

/// List every accessible calendar, default calendar first
///
/// Platform failures yield an empty list rather than an error.
pub async fn list_calendars(State(ctx): State<Arc<AppContext>>) -> Json<Vec<CalendarSummary>> {
    let command_name = "calendar::list_calendars";
    let start = Instant::now();

    let calendars = ctx.directory.list_calendars().await;

    log_command_execution(command_name, start.elapsed(), true);
    Json(calendars)
}

/// Search a calendar's next year of events
pub async fn search_events(
    State(ctx): State<Arc<AppContext>>,
    Path(calendar_id): Path<String>,
    Query(params): Query<EventSearchQuery>,
) -> Json<Vec<EventSummary>> {
    let command_name = "calendar::search_events";
    let start = Instant::now();

    info!(command = command_name, calendar_id = %calendar_id, "searching events");
    let events = ctx.resolver.search(&calendar_id, &params.query).await;

    log_command_execution(command_name, start.elapsed(), true);
    Json(events)
}
