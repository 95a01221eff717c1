use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use formguest_domain::FormGuestError;
use serde::Serialize;

use crate::utils::logging::error_label;

/// API error response body.
///
/// Serialises as:
/// ```json
/// { "ok": false, "error": { "code": "<code>", "message": "<message>" } }
/// ```
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ApiErrorResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorResponse {
    pub ok: bool,
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorResponse {
                ok: false,
                error: ApiErrorBody { code: code.into(), message: message.into() },
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Any error that reaches the HTTP layer is a server-side fault; the label
/// tells the dialog which platform call failed.
impl From<FormGuestError> for ApiError {
    fn from(err: FormGuestError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error_label(&err), err.to_string())
    }
}
