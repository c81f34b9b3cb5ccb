//! Data models
//!
//! Shared between cafe-server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod cafe;

// Re-exports
pub use cafe::*;
