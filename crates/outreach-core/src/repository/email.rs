//! Email repository trait definition.
//!
//! Defines the storage interface for sent-email records. The infrastructure
//! layer (outreach-infra) implements this trait with SQLite persistence.
//!
//! Uses native async fn in traits (Rust 2024 edition, no async_trait macro).

use outreach_types::email::EmailRecord;
use outreach_types::error::RepositoryError;

/// Repository trait for sent-email persistence.
pub trait EmailRepository: Send + Sync {
    /// Persist a sent email.
    fn insert(
        &self,
        email: &EmailRecord,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// List all sent emails, newest first.
    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<EmailRecord>, RepositoryError>> + Send;
}
