//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by the REST API.
//! Services are generic over repository/client traits, but AppState pins
//! them to the concrete infra implementations.

use std::sync::Arc;

use outreach_core::assistant::EmailWorkflow;
use outreach_core::llm::BoxCompletionClient;
use outreach_core::service::EmailService;
use outreach_infra::config::AppConfig;
use outreach_infra::llm::gemini::GeminiClient;
use outreach_infra::sqlite::{DatabasePool, SqliteEmailRepository};

/// Concrete type alias for the email service pinned to the SQLite repository.
pub type ConcreteEmailService = EmailService<SqliteEmailRepository>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub email_service: Arc<ConcreteEmailService>,
    pub workflow: Arc<EmailWorkflow>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: connect to the DB, wire services.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        // Ensure the data directory exists before opening the database
        tokio::fs::create_dir_all(&config.data_dir).await?;

        let db_pool = DatabasePool::new(&config.database_url()).await?;

        let email_service = EmailService::new(SqliteEmailRepository::new(db_pool.clone()));

        let gemini = GeminiClient::new(config.gemini_api_key.clone(), config.model.clone());
        let workflow = EmailWorkflow::new(BoxCompletionClient::new(gemini), config.model.clone());

        Ok(Self {
            email_service: Arc::new(email_service),
            workflow: Arc::new(workflow),
            db_pool,
        })
    }
}
