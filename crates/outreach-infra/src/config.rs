//! Environment-based application configuration.
//!
//! All settings come from environment variables; there is no config file.
//! `GEMINI_API_KEY` is required and its absence is a startup error -- the
//! process refuses to serve without a working provider credential.

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Default completion model.
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default HTTP port.
const DEFAULT_PORT: u16 = 3001;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY environment variable is required")]
    MissingApiKey,

    #[error("invalid PORT value: '{0}'")]
    InvalidPort(String),
}

/// Application configuration resolved from the environment.
pub struct AppConfig {
    /// Gemini API key. Wrapped in [`SecretString`]; never logged.
    pub gemini_api_key: SecretString,
    /// Completion model identifier (`OUTREACH_MODEL`, default gemini-1.5-flash).
    pub model: String,
    /// HTTP listen port (`PORT`, default 3001).
    pub port: u16,
    /// Directory holding the SQLite database (`OUTREACH_DATA_DIR`,
    /// default `~/.outreach`).
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(SecretString::from)
            .ok_or(ConfigError::MissingApiKey)?;

        let model =
            std::env::var("OUTREACH_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            gemini_api_key,
            model,
            port,
            data_dir: resolve_data_dir(),
        })
    }

    /// Database URL for the SQLite file inside the data directory.
    pub fn database_url(&self) -> String {
        format!(
            "sqlite://{}?mode=rwc",
            self.data_dir.join("outreach.db").display()
        )
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort(raw.to_string()))
}

/// Resolve the data directory from `OUTREACH_DATA_DIR`, falling back to
/// `~/.outreach` (or `./.outreach` when no home directory is available).
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("OUTREACH_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".outreach")
}
