use std::sync::Arc;

use crate::core::{Config, Result};
use crate::db::DbService;

/// Shared server state, handed to every handler through axum `State`
///
/// Cheap to clone: the pool and config are reference counted.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }

    /// Open the database and build the state
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_path, config.db_max_connections).await?;
        Ok(Self::new(config.clone(), db))
    }

    /// Exact match against the configured shared secret
    pub fn api_key_matches(&self, key: Option<&str>) -> bool {
        key == Some(self.config.api_key.as_str())
    }
}
