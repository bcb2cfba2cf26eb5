use anyhow::Result;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::debug;

use shared_config::AppConfig;

/// Connection handle to the relational store, shared by every cell.
/// Cheap to clone; all statements issued through it use positional
/// placeholders with bound parameters.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Open the pool eagerly, failing fast when the store is unreachable.
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        debug!("Connecting to database");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Build the pool without touching the store; connections are opened
    /// on first use and queries fail at call time if the store is down.
    pub fn connect_lazy(config: &AppConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy(&config.database_url)?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
