use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::error::RosterError;

/// A status code plus the `{"message": ...}` body every error response carries.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        let status = match &err {
            RosterError::NotFound { .. } => StatusCode::NOT_FOUND,
            RosterError::Conflict { .. } => StatusCode::CONFLICT,
            RosterError::Validation { .. } | RosterError::MalformedData { .. } => {
                StatusCode::BAD_REQUEST
            }
            _ => {
                error!(error = %err, "Store operation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}
