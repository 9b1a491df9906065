//! Email generation handler driving the two-stage workflow.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use outreach_types::email::{EmailType, WorkflowRequest};

use crate::http::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceEmailResponse {
    pub success: bool,
    pub email_type: EmailType,
    pub subject: String,
    pub body: String,
}

/// POST /enhance-email - Generate an email draft from recipient + context.
///
/// Validates that `messageContext` is present before the workflow runs;
/// the workflow itself performs no input validation.
pub async fn enhance_email(
    State(state): State<AppState>,
    Json(request): Json<WorkflowRequest>,
) -> Result<Json<EnhanceEmailResponse>, ApiError> {
    if request.message_context.trim().is_empty() {
        return Err(ApiError::Validation(
            "Missing required fields. 'messageContext' is required.".to_string(),
        ));
    }

    let generated = state.workflow.generate(&request).await?;

    Ok(Json(EnhanceEmailResponse {
        success: true,
        email_type: generated.email_type,
        subject: generated.subject,
        body: generated.body,
    }))
}
