use super::types::ErrorResponse;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Every way a review request can fail.
///
/// Validation failures map to `400 Bad Request`; faults that are not the client's doing
/// map to `500 Internal Server Error`. The display text is sent back as `{"error": ...}`.
#[derive(Debug, Error, PartialEq)]
pub enum ReviewError {
    /// Read filtered on a location outside the allow-list.
    #[error("Location not allowed")]
    LocationNotAllowed,

    /// Create named a location outside the allow-list.
    #[error("Location not allowed.")]
    CreateLocationNotAllowed,

    #[error("ReviewBody and Location are required.")]
    MissingFields,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The query string could not be decoded.
    #[error("Invalid query: {0}")]
    MalformedQuery(String),

    /// The create body could not be decoded.
    #[error("{0}")]
    MalformedBody(String),

    /// A stored record no longer has a parseable timestamp.
    #[error("Stored review has unparseable timestamp '{0}'")]
    CorruptTimestamp(String),
}

impl ReviewError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReviewError::LocationNotAllowed
            | ReviewError::CreateLocationNotAllowed
            | ReviewError::MissingFields
            | ReviewError::InvalidDate(_)
            | ReviewError::MalformedQuery(_) => StatusCode::BAD_REQUEST,
            ReviewError::MalformedBody(_) | ReviewError::CorruptTimestamp(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
