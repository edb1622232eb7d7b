// ============================================================
// Layer 1b — HTTP Error Mapping
// ============================================================
// Converts CoreError into a status code and a JSON body.
//
// Every error body is `{"detail": "..."}`, the shape the web
// frontend reads.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::error::CoreError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, detail: detail.into() }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, detail: detail.into() }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        let (status, detail) = match &e {
            CoreError::NoDocumentAvailable => (
                StatusCode::BAD_REQUEST,
                "No manual available. Please upload a document first.".to_string(),
            ),
            CoreError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            CoreError::Configuration(_) => (StatusCode::BAD_REQUEST, e.to_string()),
            CoreError::DocumentNotFound(_) => (StatusCode::NOT_FOUND, "Manual not found".to_string()),
            CoreError::Extraction { reason, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error reading PDF: {reason}"),
            ),
            CoreError::Completion(_) => (StatusCode::BAD_GATEWAY, e.to_string()),
            CoreError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        if status.is_server_error() {
            tracing::error!("{}", e);
        } else {
            tracing::debug!("{}", e);
        }
        Self { status, detail }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
