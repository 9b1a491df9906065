//! SQLite persistence for sent emails.

pub mod email;
pub mod pool;

pub use email::SqliteEmailRepository;
pub use pool::DatabasePool;
