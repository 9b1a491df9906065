//! Services coordinating repositories for the application layer.

pub mod email;

pub use email::EmailService;
