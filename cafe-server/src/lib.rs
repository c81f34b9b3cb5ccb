//! Cafe Server - JSON API over a single SQLite table of cafes
//!
//! # Module structure
//!
//! ```text
//! cafe-server/src/
//! ├── core/     # config, state, server, startup errors
//! ├── api/      # routes and handlers
//! ├── db/       # SQLite pool and repository
//! └── utils/    # AppError, AppResult, logger
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use api::build_router;
pub use self::core::{Config, Server, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
