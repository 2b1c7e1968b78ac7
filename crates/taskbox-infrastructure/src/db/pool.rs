//! Database connection pooling for PostgreSQL
//!
//! Connection pooling with r2d2. The pool is created once at startup and
//! shared read-only by the repository adapters.

use super::run_blocking;
use crate::config::DatabaseConfig;
use r2d2::Pool;
use r2d2_postgres::{postgres::NoTls, PostgresConnectionManager};
use std::time::Duration;
use taskbox_domain::error::{Error, Result};

/// Pooled connection handle
pub type PgConnection = r2d2::PooledConnection<PostgresConnectionManager<NoTls>>;

/// Database connection pool
#[derive(Clone)]
pub struct DatabasePool {
    pool: Pool<PostgresConnectionManager<NoTls>>,
    config: DatabaseConfig,
}

impl DatabasePool {
    /// Create a connection pool from configuration
    ///
    /// # Errors
    /// `Error::Configuration` for an unparseable URL, `Error::Database`
    /// when the pool cannot establish its initial connections.
    pub fn connect(config: DatabaseConfig) -> Result<Self> {
        let manager = PostgresConnectionManager::new(
            config
                .url
                .parse()
                .map_err(|e| Error::configuration_with_source("Invalid database URL", e))?,
            NoTls,
        );

        let pool = Pool::builder()
            .max_size(config.max_connections)
            .connection_timeout(Duration::from_secs(config.connection_timeout_secs))
            .build(manager)
            .map_err(|e| Error::database_with_source("Failed to create connection pool", e))?;

        Ok(Self { pool, config })
    }

    /// Get a connection from the pool
    pub fn get(&self) -> Result<PgConnection> {
        self.pool
            .get()
            .map_err(|e| Error::database_with_source("Failed to get database connection", e))
    }

    /// Execute a round-trip health check
    pub async fn health_check(&self) -> Result<()> {
        let pool = self.clone();
        run_blocking(move || {
            let mut conn = pool.get()?;
            conn.execute("SELECT 1", &[])
                .map_err(|e| Error::database_with_source("Database health check failed", e))?;
            Ok(())
        })
        .await
    }

    /// Get configuration
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}
