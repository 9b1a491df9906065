//! The email generation workflow: classify intent, then generate content.

pub mod parse;
pub mod prompt;
pub mod workflow;

pub use workflow::EmailWorkflow;
