use std::time::Duration;

use formguest_domain::FormGuestError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` controls filtering (default `info`). Setting
/// `FORMGUEST_LOG_FORMAT=json` switches to JSON lines. Calling this twice is
/// harmless; the second install is ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("FORMGUEST_LOG_FORMAT")
        .map(|value| value.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let installed = if json { builder.json().try_init() } else { builder.try_init() };

    if let Err(err) = installed {
        tracing::debug!(error = %err, "tracing subscriber already installed");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"configuration::save"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `FormGuestError` into a stable label suitable for logging and
/// API error codes.
#[inline]
pub fn error_label(error: &FormGuestError) -> &'static str {
    match error {
        FormGuestError::Database(_) => "database",
        FormGuestError::Config(_) => "config",
        FormGuestError::Platform(_) => "platform",
        FormGuestError::Network(_) => "network",
        FormGuestError::Auth(_) => "auth",
        FormGuestError::NotFound(_) => "not_found",
        FormGuestError::InvalidInput(_) => "invalid_input",
        FormGuestError::Internal(_) => "internal",
    }
}
