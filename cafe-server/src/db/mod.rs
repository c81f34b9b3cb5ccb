//! Database Module
//!
//! Handles the SQLite connection pool and the cafe table bootstrap

pub mod repository;

use crate::utils::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Table definition. Matches the layout of databases written by the
/// previous service so an existing `cafes.db` can be served as-is.
const CREATE_CAFE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS cafe (
    id INTEGER NOT NULL PRIMARY KEY,
    name VARCHAR(250) NOT NULL UNIQUE,
    map_url VARCHAR(500) NOT NULL,
    img_url VARCHAR(500) NOT NULL,
    location VARCHAR(250) NOT NULL,
    seats VARCHAR(250) NOT NULL,
    has_toilet BOOLEAN,
    has_wifi BOOLEAN,
    has_sockets BOOLEAN,
    can_take_calls BOOLEAN,
    coffee_price VARCHAR(250)
)
"#;

/// Database service — owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database file in WAL mode and make sure the
    /// cafe table exists
    pub async fn new(db_path: &str, max_connections: u32) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| AppError::database(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            // wait up to 5s on a locked database instead of failing
            .busy_timeout(Duration::from_secs(5))
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(path = %db_path, "Database connection established (SQLite WAL, busy_timeout=5000ms)");

        let service = Self { pool };
        service.ensure_schema().await?;
        Ok(service)
    }

    /// Create the cafe table when missing. Existing tables are left untouched.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(CREATE_CAFE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create cafe table: {e}")))?;
        Ok(())
    }
}
