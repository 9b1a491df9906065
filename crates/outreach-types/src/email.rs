//! Email domain types for Outreach.
//!
//! These types model the two sides of the system: the assistant workflow
//! (classification intent, generated drafts) and the sent-email store
//! (records persisted by the HTTP layer).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Intent of a generated email, decided by the classification stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailType {
    Sales,
    FollowUp,
}

impl fmt::Display for EmailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailType::Sales => write!(f, "sales"),
            EmailType::FollowUp => write!(f, "follow_up"),
        }
    }
}

impl FromStr for EmailType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim() {
            "sales" => Ok(EmailType::Sales),
            "follow_up" => Ok(EmailType::FollowUp),
            other => Err(format!("invalid email type: '{other}'")),
        }
    }
}

/// Input to one workflow invocation.
///
/// `recipient_name` may be empty; the prompt templates degrade to an empty
/// substitution. `message_context` must be non-empty, which the HTTP layer
/// validates before the workflow is invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRequest {
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub message_context: String,
}

/// A subject/body pair as returned by the generation stage, before the
/// classified intent is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftEmail {
    pub subject: String,
    pub body: String,
}

/// Final output of a successful workflow run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedEmail {
    pub email_type: EmailType,
    pub subject: String,
    pub body: String,
}

/// Payload for creating a sent-email record.
///
/// Required fields are `Option` so the handler can reject missing ones with
/// a 400 and the original error message instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmailRequest {
    pub to: Option<String>,
    pub cc: Option<String>,
    pub bcc: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
}

/// A validated new email, ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewEmail {
    pub to: String,
    pub cc: Option<String>,
    pub bcc: Option<String>,
    pub subject: String,
    pub body: String,
}

/// A sent email as stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRecord {
    pub id: uuid::Uuid,
    pub to: String,
    pub cc: Option<String>,
    pub bcc: Option<String>,
    pub subject: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
