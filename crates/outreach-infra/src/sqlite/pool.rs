//! SQLite connection pools for the email store.
//!
//! Writes go through a single-connection pool, so SQLite's one-writer rule
//! is enforced by construction; reads go through a separate pool of up to
//! eight connections. WAL journal mode keeps readers unblocked while an
//! insert is in flight. Migrations run on the writer before the reader
//! pool opens.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Paired reader/writer pools over one SQLite file.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Open both pools for `database_url` and bring the schema up to date.
    ///
    /// The writer opens first and runs the bundled migrations; the
    /// read-only reader pool opens only once the schema exists. Both sides
    /// use WAL mode, enforce foreign keys, and wait up to five seconds on
    /// a busy database before failing.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .create_if_missing(true);

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options.clone())
            .await?;

        sqlx::migrate!("../../migrations").run(&writer).await?;
        tracing::debug!("database migrations applied");

        let reader = SqlitePoolOptions::new()
            .max_connections(8)
            .connect_with(options.read_only(true))
            .await?;

        Ok(Self { reader, writer })
    }
}
