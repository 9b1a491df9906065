//! Infrastructure layer for Outreach.
//!
//! Contains implementations of the ports defined in `outreach-core`:
//! SQLite storage for sent emails, the Gemini completion client, and
//! environment-based configuration loading.

pub mod config;
pub mod llm;
pub mod sqlite;
