//! Data-access layer for projects and comments.
//!
//! - [`create_pool`] builds the shared PostgreSQL pool.
//! - [`repositories`] hold the SQL, one zero-sized struct per table.
//! - [`store`] puts a trait in front of the repositories so the HTTP layer
//!   can run against PostgreSQL or an in-memory fake.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{MemoryStore, PgStore, PortfolioStore};

pub type DbPool = sqlx::PgPool;

/// Connection settings for the relational store.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// How long a request waits for a free connection before failing.
    pub acquire_timeout: Duration,
    /// TLS mode forced onto every connection. `Require` encrypts the link
    /// without verifying the server certificate.
    pub ssl_mode: PgSslMode,
}

impl DbConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
            ssl_mode: PgSslMode::Require,
        }
    }
}

/// Create a connection pool from the given configuration.
///
/// The pool connects lazily: no connection is opened here, so an unreachable
/// database does not stop the caller from starting. Only a malformed URL is
/// reported as an error.
pub fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(&config.url)?.ssl_mode(config.ssl_mode);

    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(options))
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_config_defaults_to_unverified_tls() {
        let config = DbConfig::new("postgres://localhost/portfolio");
        assert_eq!(config.max_connections, 10);
        assert!(matches!(config.ssl_mode, PgSslMode::Require));
    }

    #[tokio::test]
    async fn create_pool_is_lazy() {
        // Nothing listens on this port; building the pool must still succeed.
        let config = DbConfig::new("postgres://user:pw@127.0.0.1:1/none");
        let pool = create_pool(&config).expect("valid URL");
        assert_eq!(pool.size(), 0);
    }

    #[test]
    fn create_pool_rejects_malformed_url() {
        let config = DbConfig::new("not a url");
        assert!(create_pool(&config).is_err());
    }
}
