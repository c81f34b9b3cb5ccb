/// Server configuration
///
/// # Environment variables
///
/// Every value can be overridden through the environment (or a `.env` file):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_PATH | cafes.db | SQLite database file |
/// | HTTP_HOST | 0.0.0.0 | Bind address |
/// | HTTP_PORT | 8000 | HTTP port |
/// | API_KEY | TopSecretAPIKey | Shared secret for add/delete |
/// | DB_MAX_CONNECTIONS | 5 | Pool size |
/// | LOG_DIR | (unset) | Enables daily rolling log files |
///
/// # Example
///
/// ```ignore
/// API_KEY=s3cret HTTP_PORT=8080 cargo run -p cafe-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file
    pub database_path: String,
    /// Bind address
    pub http_host: String,
    /// HTTP port
    pub http_port: u16,
    /// Shared secret required on `?api-key=` for add and delete
    pub api_key: String,
    /// Maximum pooled SQLite connections
    pub db_max_connections: u32,
    /// Log directory; file logging is off when unset
    pub log_dir: Option<String>,
}

pub const DEFAULT_API_KEY: &str = "TopSecretAPIKey";

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "cafes.db".into()),
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            api_key: std::env::var("API_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .unwrap_or_else(|| DEFAULT_API_KEY.into()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(5),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// Build a config with explicit values, used by tests
    pub fn with_overrides(database_path: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
            http_host: "127.0.0.1".into(),
            http_port: 0,
            api_key: api_key.into(),
            db_max_connections: 5,
            log_dir: None,
        }
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
