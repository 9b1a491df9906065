//! HTTP request handlers.

pub mod assist;
pub mod email;
