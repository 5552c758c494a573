//! PostgreSQL client implementation
//!
//! This module provides the pooled connection handle shared by every store.
//! The pool is built once from configuration and passed into each store
//! explicitly; nothing here is global.

use crate::config::schema::DatabaseConfig;
use crate::domain::{MedrecError, Result};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio_postgres::types::ToSql;
use tokio_postgres::{NoTls, Row};

/// Wraps a driver-level failure with a summary that keeps the driver message
/// visible while leaving the original error reachable through `source()`.
fn storage_err(
    context: &str,
    err: impl std::error::Error + Send + Sync + 'static,
) -> MedrecError {
    let detail = format!("{context}: {err}");
    MedrecError::storage_with(detail, err)
}

/// PostgreSQL client for medrec
///
/// Owns the connection pool and provides the low-level query helpers the
/// stores are built on. The explicit user and password from configuration
/// override any credentials embedded in the URL, matching how they are
/// supplied through the environment.
#[derive(Debug)]
pub struct PostgresClient {
    /// Connection pool
    pool: Pool,

    /// Configuration
    config: DatabaseConfig,
}

impl PostgresClient {
    /// Create a new PostgreSQL client
    ///
    /// Building the pool performs no I/O; connections are established
    /// lazily, so call [`test_connection`](Self::test_connection) to probe
    /// the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or the pool cannot be
    /// configured.
    pub fn new(config: DatabaseConfig) -> Result<Self> {
        let mut pg_config: tokio_postgres::Config = config.url.parse().map_err(
            |e: tokio_postgres::Error| {
                MedrecError::Configuration(format!("Invalid database URL: {e}"))
            },
        )?;

        pg_config.user(&config.user);
        let password = config.password.expose_secret();
        if !password.is_empty() {
            pg_config.password(password.as_ref());
        }

        let manager = Manager::from_config(
            pg_config,
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            },
        );

        let timeout = Duration::from_secs(config.connect_timeout_secs);
        let pool = Pool::builder(manager)
            .max_size(config.max_connections)
            .runtime(Runtime::Tokio1)
            .wait_timeout(Some(timeout))
            .create_timeout(Some(timeout))
            .recycle_timeout(Some(timeout))
            .build()
            .map_err(|e| storage_err("failed to create connection pool", e))?;

        Ok(Self { pool, config })
    }

    /// Test the connection to PostgreSQL
    ///
    /// Attempts to get a connection from the pool and execute a simple query.
    pub async fn test_connection(&self) -> Result<()> {
        let client = self.connection().await?;

        client
            .query_one("SELECT 1", &[])
            .await
            .map_err(|e| storage_err("connection test failed", e))?;

        tracing::info!(url = %self.config.redacted_url(), "database connection test successful");
        Ok(())
    }

    /// Ensure the database schema exists
    ///
    /// Runs the migration SQL to create tables and indexes if they don't
    /// exist. Safe to run repeatedly.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    pub async fn ensure_schema(&self) -> Result<()> {
        let client = self.connection().await?;

        let migration_sql = include_str!("../../../migrations/001_initial_schema.sql");

        client
            .batch_execute(migration_sql)
            .await
            .map_err(|e| storage_err("failed to run schema migration", e))?;

        tracing::info!("database schema initialized");
        Ok(())
    }

    /// Get a connection from the pool
    async fn connection(&self) -> Result<deadpool_postgres::Object> {
        self.pool
            .get()
            .await
            .map_err(|e| storage_err("failed to get connection from pool", e))
    }

    /// Execute a query and return all matching rows
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn query(
        &self,
        statement: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Vec<Row>> {
        let client = self.connection().await?;

        client
            .query(statement, params)
            .await
            .map_err(|e| storage_err("query failed", e))
    }

    /// Execute a query expected to match at most one row
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or matches more than one row.
    pub async fn query_opt(
        &self,
        statement: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Option<Row>> {
        let client = self.connection().await?;

        client
            .query_opt(statement, params)
            .await
            .map_err(|e| storage_err("query failed", e))
    }

    /// Execute a statement and return the number of affected rows
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails.
    pub async fn execute(
        &self,
        statement: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<u64> {
        let client = self.connection().await?;

        client
            .execute(statement, params)
            .await
            .map_err(|e| storage_err("statement execution failed", e))
    }

    /// Get the configuration this client was built from
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Get the pool statistics
    pub fn pool_status(&self) -> deadpool_postgres::Status {
        self.pool.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::DatabaseConfig;

    #[test]
    fn test_new_rejects_malformed_url() {
        let config = DatabaseConfig {
            url: "not a url at all".to_string(),
            ..DatabaseConfig::default()
        };

        let err = PostgresClient::new(config).unwrap_err();
        assert!(matches!(err, MedrecError::Configuration(_)));
    }

    #[test]
    fn test_new_builds_pool_without_connecting() {
        // No server is listening; building the pool must still succeed
        // because connections are established lazily.
        let config = DatabaseConfig {
            url: "postgresql://localhost:5432/medrec".to_string(),
            ..DatabaseConfig::default()
        };

        let client = PostgresClient::new(config).unwrap();
        assert_eq!(client.pool_status().size, 0);
    }

    #[test]
    fn test_storage_err_keeps_driver_message_visible() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = storage_err("connection test failed", cause);

        assert!(err.to_string().contains("connection test failed"));
        assert!(err.to_string().contains("refused"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
