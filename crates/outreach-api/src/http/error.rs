//! Application error type mapping to HTTP status codes.
//!
//! Every error body has the shape `{"error": "<message>"}`. Workflow and
//! repository failures surface their message but never raw parser or
//! provider internals beyond it.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use outreach_types::error::{RepositoryError, WorkflowError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Request validation failure (missing fields).
    Validation(String),
    /// Email generation workflow failure.
    Workflow(WorkflowError),
    /// Storage failure.
    Repository(RepositoryError),
}

impl From<WorkflowError> for ApiError {
    fn from(e: WorkflowError) -> Self {
        ApiError::Workflow(e)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        ApiError::Repository(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Workflow(WorkflowError::Completion(e)) => {
                tracing::error!(error = %e, "completion provider failure");
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
            ApiError::Workflow(e) => {
                tracing::error!(error = %e, "workflow failure");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            ApiError::Repository(RepositoryError::NotFound) => {
                (StatusCode::NOT_FOUND, "Not found".to_string())
            }
            ApiError::Repository(e) => {
                tracing::error!(error = %e, "repository failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
