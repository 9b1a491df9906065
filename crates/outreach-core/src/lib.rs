//! Business logic and repository trait definitions for Outreach.
//!
//! This crate defines the "ports" (the `CompletionClient` and
//! `EmailRepository` traits) that the infrastructure layer implements,
//! plus the email generation workflow built on top of them. It depends
//! only on `outreach-types` -- never on `outreach-infra` or any
//! database/HTTP crate.

pub mod assistant;
pub mod llm;
pub mod repository;
pub mod service;
