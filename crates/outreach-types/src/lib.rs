//! Shared domain types for Outreach.
//!
//! This crate contains the types used across the Outreach backend: email
//! records, workflow inputs/outputs, completion request/response shapes,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod email;
pub mod error;
pub mod llm;
