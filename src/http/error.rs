//! HTTP mapping for `RomanosError`
//!
//! Every error leaves the handler as a JSON object with a single
//! `error` key. Client errors never reach the logs at error level.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::RomanosError;
use crate::core::types::ErrorResponse;

/// Convert error to appropriate HTTP status code
pub fn status_code(err: &RomanosError) -> StatusCode {
    match err {
        RomanosError::MissingParameter(_)
        | RomanosError::MalformedParameter(_)
        | RomanosError::OutOfRange(_)
        | RomanosError::InvalidNumeral(_) => StatusCode::BAD_REQUEST,
        RomanosError::RouteNotFound(_) => StatusCode::NOT_FOUND,
        RomanosError::ConfigError(_) | RomanosError::IoError(_) | RomanosError::TomlError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for RomanosError {
    fn into_response(self) -> Response {
        let status = status_code(&self);

        if self.is_client_error() {
            tracing::debug!(error = %self, status = status.as_u16(), "Rejected request");
        } else {
            tracing::error!(error = %self, status = status.as_u16(), "Internal error");
        }

        let body = Json(ErrorResponse {
            error: self.public_message(),
        });

        (status, body).into_response()
    }
}
