//! Conversions from external infrastructure errors into domain errors.

use formguest_domain::FormGuestError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub FormGuestError);

impl From<InfraError> for FormGuestError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<FormGuestError> for InfraError {
    fn from(value: FormGuestError) -> Self {
        InfraError(value)
    }
}

trait IntoFormGuestError {
    fn into_formguest(self) -> FormGuestError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → FormGuestError */
/* -------------------------------------------------------------------------- */

impl IntoFormGuestError for SqlError {
    fn into_formguest(self) -> FormGuestError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match err.code {
                    ErrorCode::DatabaseBusy => FormGuestError::Database("database is busy".into()),
                    ErrorCode::DatabaseLocked => {
                        FormGuestError::Database("database is locked".into())
                    }
                    ErrorCode::ReadOnly => {
                        FormGuestError::Database("database is read-only".into())
                    }
                    ErrorCode::CannotOpen => {
                        FormGuestError::Database(format!("unable to open database: {message}"))
                    }
                    _ => FormGuestError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => FormGuestError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                FormGuestError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                FormGuestError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => FormGuestError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => FormGuestError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_formguest())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → FormGuestError */
/* -------------------------------------------------------------------------- */

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(FormGuestError::Database(format!("connection pool error: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → FormGuestError */
/* -------------------------------------------------------------------------- */

impl IntoFormGuestError for HttpError {
    fn into_formguest(self) -> FormGuestError {
        if self.is_timeout() {
            return FormGuestError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return FormGuestError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return FormGuestError::Platform(format!("unexpected response body: {self}"));
        }

        if let Some(status) = self.status() {
            return status_error(status, None);
        }

        FormGuestError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_formguest())
    }
}

/// Map a non-success platform status, optionally carrying the platform's own
/// error message.
pub(crate) fn status_error(status: reqwest::StatusCode, detail: Option<&str>) -> FormGuestError {
    let code = status.as_u16();
    let mut message =
        format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));
    if let Some(detail) = detail.filter(|d| !d.is_empty()) {
        message.push_str(": ");
        message.push_str(detail);
    }

    match code {
        401 | 403 => FormGuestError::Auth(message),
        404 | 410 => FormGuestError::NotFound(message),
        400..=499 => FormGuestError::InvalidInput(message),
        _ => FormGuestError::Platform(message),
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
