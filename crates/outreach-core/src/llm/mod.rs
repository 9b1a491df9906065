//! Completion client abstraction.

pub mod box_client;
pub mod client;

pub use box_client::BoxCompletionClient;
pub use client::CompletionClient;
