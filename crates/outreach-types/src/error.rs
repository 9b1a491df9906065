//! Workflow and repository error types.

use thiserror::Error;

use crate::llm::CompletionError;

/// Errors from one workflow invocation.
///
/// Every failure inside the two-stage pipeline resolves to one of these
/// variants at the orchestrator boundary; nothing escapes as a panic.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The completion provider was unreachable or rejected the request.
    /// Surfaced verbatim as the failure message, never retried.
    #[error("{0}")]
    Completion(#[from] CompletionError),

    /// The model returned text that is not a valid `{subject, body}` JSON
    /// object. The message is a fixed, stage-specific string rather than
    /// the parser internals.
    #[error("{message}")]
    MalformedGeneration { message: String },
}

/// Errors from repository operations (used by trait definitions in outreach-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}
