//! Binding management commands backing the dialog

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::Json;
use formguest_domain::DialogData;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::server::ApiError;
use crate::utils::logging::{error_label, log_command_execution};
use crate::AppContext;

/// Body of `POST /api/configuration`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveConfigurationRequest {
    pub calendar_id: String,
    pub event_id: String,
}

/// Body of `PUT /api/form/accepting-responses`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AcceptingResponsesRequest {
    pub enabled: bool,
}

fn finish(command_name: &str, start: Instant, data: DialogData) -> Json<DialogData> {
    log_command_execution(command_name, start.elapsed(), !data.is_fault());
    Json(data)
}

/// Current binding status
pub async fn get_status(State(ctx): State<Arc<AppContext>>) -> Json<DialogData> {
    let start = Instant::now();
    let data = ctx.manager.get_status().await;
    finish("configuration::get_status", start, data)
}

/// Bind the form to an event and install the submission trigger
pub async fn save_configuration(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<SaveConfigurationRequest>,
) -> Json<DialogData> {
    let command_name = "configuration::save";
    let start = Instant::now();

    info!(
        command = command_name,
        calendar_id = %request.calendar_id,
        event_id = %request.event_id,
        "saving configuration"
    );
    let data = ctx.manager.save(&request.calendar_id, &request.event_id).await;
    finish(command_name, start, data)
}

/// Clear the binding and remove the submission trigger
pub async fn reset_configuration(State(ctx): State<Arc<AppContext>>) -> Json<DialogData> {
    let command_name = "configuration::reset";
    let start = Instant::now();

    info!(command = command_name, "resetting configuration");
    let data = ctx.manager.reset().await;
    finish(command_name, start, data)
}

/// Open or close the form and echo the new state
///
/// This is the only dialog operation that surfaces platform errors as an
/// HTTP error status.
pub async fn set_accepting_responses(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<AcceptingResponsesRequest>,
) -> Result<Json<bool>, ApiError> {
    let command_name = "form::set_accepting_responses";
    let start = Instant::now();

    let result = ctx.manager.set_accepting_responses(request.enabled).await;
    log_command_execution(command_name, start.elapsed(), result.is_ok());

    match result {
        Ok(enabled) => Ok(Json(enabled)),
        Err(err) => {
            warn!(
                command = command_name,
                error_type = error_label(&err),
                error = %err,
                "failed to toggle accepting responses"
            );
            Err(err.into())
        }
    }
}

/// Payload for the management dialog
pub async fn get_dialog_data(State(ctx): State<Arc<AppContext>>) -> Json<DialogData> {
    let start = Instant::now();
    let data = ctx.assembler.assemble().await;
    finish("dialog::get_dialog_data", start, data)
}
