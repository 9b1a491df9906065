//! Email service coordinating sent-email persistence.
//!
//! Generic over `EmailRepository` to maintain clean architecture
//! (outreach-core never depends on outreach-infra).

use chrono::Utc;
use uuid::Uuid;

use outreach_types::email::{EmailRecord, NewEmail};
use outreach_types::error::RepositoryError;

use crate::repository::EmailRepository;

/// Stores and lists sent emails through the configured repository.
pub struct EmailService<R: EmailRepository> {
    repo: R,
}

impl<R: EmailRepository> EmailService<R> {
    /// Create a new email service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a sent email, assigning a UUIDv7 id and creation timestamp.
    pub async fn save(&self, email: NewEmail) -> Result<EmailRecord, RepositoryError> {
        let record = EmailRecord {
            id: Uuid::now_v7(),
            to: email.to,
            cc: email.cc,
            bcc: email.bcc,
            subject: email.subject,
            body: email.body,
            created_at: Utc::now(),
        };

        self.repo.insert(&record).await?;
        Ok(record)
    }

    /// List all sent emails, newest first.
    pub async fn list(&self) -> Result<Vec<EmailRecord>, RepositoryError> {
        self.repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory repository for service tests.
    struct MemoryEmailRepository {
        records: Mutex<Vec<EmailRecord>>,
    }

    impl MemoryEmailRepository {
        fn new() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
            }
        }
    }

    impl EmailRepository for MemoryEmailRepository {
        async fn insert(&self, email: &EmailRecord) -> Result<(), RepositoryError> {
            self.records.lock().unwrap().push(email.clone());
            Ok(())
        }

        async fn list(&self) -> Result<Vec<EmailRecord>, RepositoryError> {
            let mut records = self.records.lock().unwrap().clone();
            records.reverse();
            Ok(records)
        }
    }

    fn new_email(subject: &str) -> NewEmail {
        NewEmail {
            to: "someone@example.com".to_string(),
            cc: None,
            bcc: None,
            subject: subject.to_string(),
            body: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_id_and_timestamp() {
        let service = EmailService::new(MemoryEmailRepository::new());

        let record = service.save(new_email("First")).await.unwrap();
        assert_eq!(record.subject, "First");
        assert!(!record.id.is_nil());
    }

    #[tokio::test]
    async fn test_save_then_list_roundtrip() {
        let service = EmailService::new(MemoryEmailRepository::new());

        service.save(new_email("First")).await.unwrap();
        service.save(new_email("Second")).await.unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].subject, "Second");
    }
}
