//! Webhook receiving form submissions from the hosted platform

use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use formguest_core::DispatchOutcome;
use formguest_domain::FormSubmission;
use tracing::{info, warn};

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Handle a "form submitted" event
///
/// Always answers `202 Accepted`. Malformed payloads are logged and dropped,
/// and the handler itself never reports failure to the platform.
pub async fn form_submitted(State(ctx): State<Arc<AppContext>>, body: Bytes) -> StatusCode {
    let command_name = "submission::form_submitted";
    let start = Instant::now();

    let submission: FormSubmission = match serde_json::from_slice(&body) {
        Ok(submission) => submission,
        Err(err) => {
            warn!(command = command_name, error = %err, "ignoring malformed submission payload");
            log_command_execution(command_name, start.elapsed(), false);
            return StatusCode::ACCEPTED;
        }
    };

    if let Some(form_id) = submission.form_id.as_deref() {
        if form_id != ctx.config.google.form_id {
            warn!(
                command = command_name,
                form_id,
                response_id = %submission.response_id,
                "submission is for a different form; ignoring"
            );
            log_command_execution(command_name, start.elapsed(), false);
            return StatusCode::ACCEPTED;
        }
    }

    let outcome = ctx.dispatcher.dispatch(&submission).await;
    info!(
        command = command_name,
        response_id = %submission.response_id,
        handled = outcome == DispatchOutcome::Handled,
        "submission dispatched"
    );

    log_command_execution(command_name, start.elapsed(), true);
    StatusCode::ACCEPTED
}
