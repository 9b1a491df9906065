//! SQLite email repository implementation.
//!
//! Implements `EmailRepository` from `outreach-core` using sqlx with split
//! read/write pools.

use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use outreach_core::repository::EmailRepository;
use outreach_types::email::EmailRecord;
use outreach_types::error::RepositoryError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `EmailRepository`.
pub struct SqliteEmailRepository {
    pool: DatabasePool,
}

impl SqliteEmailRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Internal row type
// ---------------------------------------------------------------------------

struct EmailRow {
    id: String,
    to: String,
    cc: Option<String>,
    bcc: Option<String>,
    subject: String,
    body: String,
    created_at: String,
}

impl EmailRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            to: row.try_get("to")?,
            cc: row.try_get("cc")?,
            bcc: row.try_get("bcc")?,
            subject: row.try_get("subject")?,
            body: row.try_get("body")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_record(self) -> Result<EmailRecord, RepositoryError> {
        Ok(EmailRecord {
            id: parse_uuid(&self.id)?,
            to: self.to,
            cc: self.cc,
            bcc: self.bcc,
            subject: self.subject,
            body: self.body,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_uuid(s: &str) -> Result<Uuid, RepositoryError> {
    s.parse::<Uuid>()
        .map_err(|e| RepositoryError::Query(format!("invalid UUID: {e}")))
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid timestamp: {e}")))
}

impl EmailRepository for SqliteEmailRepository {
    async fn insert(&self, email: &EmailRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO emails (id, "to", cc, bcc, subject, body, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(email.id.to_string())
        .bind(&email.to)
        .bind(&email.cc)
        .bind(&email.bcc)
        .bind(&email.subject)
        .bind(&email.body)
        .bind(email.created_at.to_rfc3339())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<EmailRecord>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT id, "to", cc, bcc, subject, body, created_at
               FROM emails
               ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                EmailRow::from_row(row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?
                    .into_record()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_pool(dir: &tempfile::TempDir) -> DatabasePool {
        let db_path = dir.path().join("emails.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        DatabasePool::new(&url).await.unwrap()
    }

    fn record(subject: &str) -> EmailRecord {
        EmailRecord {
            id: Uuid::now_v7(),
            to: "lead@example.com".to_string(),
            cc: Some("manager@example.com".to_string()),
            bcc: None,
            subject: subject.to_string(),
            body: "Hello there".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_list_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteEmailRepository::new(test_pool(&dir).await);

        let email = record("Quick intro");
        repo.insert(&email).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, email.id);
        assert_eq!(listed[0].to, "lead@example.com");
        assert_eq!(listed[0].cc.as_deref(), Some("manager@example.com"));
        assert!(listed[0].bcc.is_none());
        assert_eq!(listed[0].subject, "Quick intro");
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteEmailRepository::new(test_pool(&dir).await);

        let mut first = record("First");
        first.created_at = Utc::now() - chrono::Duration::minutes(5);
        let second = record("Second");

        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed[0].subject, "Second");
        assert_eq!(listed[1].subject, "First");
    }

    #[tokio::test]
    async fn test_list_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteEmailRepository::new(test_pool(&dir).await);

        assert!(repo.list().await.unwrap().is_empty());
    }
}
