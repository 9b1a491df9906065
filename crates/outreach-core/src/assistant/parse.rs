//! Response parsing for the two workflow stages.
//!
//! Category parsing never fails: an unrecognized token routes to the sales
//! template (a routing concern, not a parse error). Structured parsing
//! strips markdown code fences before decoding JSON and fails with a typed
//! error that the workflow converts into a stage-specific message.

use outreach_types::email::{DraftEmail, EmailType};

/// Errors from parsing a generated draft.
#[derive(Debug, thiserror::Error)]
pub enum DraftParseError {
    #[error("invalid JSON: {0}")]
    Json(String),

    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("missing or non-string field '{0}'")]
    InvalidField(&'static str),
}

/// Map raw classifier output to an email type.
///
/// Lower-cases and trims the raw text. Anything other than exactly
/// `follow_up` resolves to [`EmailType::Sales`] -- including the literal
/// `sales` token, an empty string, and garbage. The unexpected case is
/// logged so "model said sales" stays distinguishable from "model said
/// something unrecognized".
pub fn parse_category(raw: &str) -> EmailType {
    match raw.parse::<EmailType>() {
        Ok(email_type) => email_type,
        Err(_) => {
            tracing::warn!(
                category = raw.trim(),
                "unrecognized classification output; falling back to sales"
            );
            EmailType::Sales
        }
    }
}

/// Parse raw model output into a `{subject, body}` draft.
///
/// Accepts the JSON object bare, wrapped in a ```json fence, or wrapped in
/// an unlabeled fence. Requires string-valued `subject` and `body` fields;
/// extra fields are ignored.
pub fn parse_draft(raw: &str) -> Result<DraftEmail, DraftParseError> {
    let cleaned = strip_code_fences(raw);

    let value: serde_json::Value =
        serde_json::from_str(cleaned).map_err(|e| DraftParseError::Json(e.to_string()))?;

    let object = value.as_object().ok_or(DraftParseError::NotAnObject)?;

    let subject = object
        .get("subject")
        .and_then(|v| v.as_str())
        .ok_or(DraftParseError::InvalidField("subject"))?;
    let body = object
        .get("body")
        .and_then(|v| v.as_str())
        .ok_or(DraftParseError::InvalidField("body"))?;

    Ok(DraftEmail {
        subject: subject.to_string(),
        body: body.to_string(),
    })
}

/// Strip a surrounding markdown code fence, labeled or not.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // The opening fence may carry a "json" label, with or without a
    // newline between it and the payload.
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_prefix('\n').unwrap_or(rest);

    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
