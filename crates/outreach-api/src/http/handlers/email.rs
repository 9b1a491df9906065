//! Sent-email CRUD handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use outreach_types::email::{CreateEmailRequest, EmailRecord, NewEmail};

use crate::http::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ListEmailsResponse {
    pub emails: Vec<EmailRecord>,
}

#[derive(Serialize)]
pub struct CreateEmailResponse {
    pub email: EmailRecord,
}

/// GET /emails - List stored emails, newest first.
pub async fn list_emails(
    State(state): State<AppState>,
) -> Result<Json<ListEmailsResponse>, ApiError> {
    let emails = state.email_service.list().await?;
    Ok(Json(ListEmailsResponse { emails }))
}

/// POST /emails - Validate and persist a sent email.
pub async fn create_email(
    State(state): State<AppState>,
    Json(body): Json<CreateEmailRequest>,
) -> Result<(StatusCode, Json<CreateEmailResponse>), ApiError> {
    let (Some(to), Some(subject), Some(text)) = (body.to, body.subject, body.body) else {
        return Err(ApiError::Validation(
            "Missing required fields. 'to', 'subject', and 'body' are required.".to_string(),
        ));
    };

    let email = state
        .email_service
        .save(NewEmail {
            to,
            cc: body.cc,
            bcc: body.bcc,
            subject,
            body: text,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CreateEmailResponse { email })))
}
