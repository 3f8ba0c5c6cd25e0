use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use portfolio_db::DbConfig;
use sqlx::postgres::PgSslMode;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Which origins may call the API from a browser.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsPolicy {
    /// Any origin (`CORS_ORIGINS=*`).
    Any,
    /// Only the listed origins.
    List(Vec<HeaderValue>),
}

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// Everything except the database URL has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors: CorsPolicy,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Log output format (default: pretty).
    pub log_format: LogFormat,
    /// Relational store connection settings.
    pub db: DbConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default        |
    /// |---------------------------|----------------|
    /// | `HOST`                    | `0.0.0.0`      |
    /// | `PORT`                    | `3000`         |
    /// | `DATABASE_URL` or `BDD`   | (required)     |
    /// | `DB_MAX_CONNECTIONS`      | `10`           |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`            |
    /// | `DB_SSL_MODE`             | `require`      |
    /// | `CORS_ORIGINS`            | `*`            |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`           |
    /// | `LOG_FORMAT`              | `pretty`       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host: IpAddr = parse_or("HOST", &lookup, "0.0.0.0")?;
        let port: u16 = parse_or("PORT", &lookup, "3000")?;
        let request_timeout_secs: u64 = parse_or("REQUEST_TIMEOUT_SECS", &lookup, "30")?;

        let url = lookup("DATABASE_URL")
            .or_else(|| lookup("BDD"))
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections: u32 = parse_or("DB_MAX_CONNECTIONS", &lookup, "10")?;
        let acquire_timeout_secs: u64 = parse_or("DB_ACQUIRE_TIMEOUT_SECS", &lookup, "5")?;
        let ssl_mode: PgSslMode = parse_or("DB_SSL_MODE", &lookup, "require")?;

        let cors = parse_cors(&lookup("CORS_ORIGINS").unwrap_or_else(|| "*".into()))?;

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    value: other.to_string(),
                    reason: "expected 'pretty' or 'json'".to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            cors,
            request_timeout_secs,
            log_format,
            db: DbConfig {
                url,
                max_connections,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
                ssl_mode,
            },
        })
    }
}

fn parse_or<T, F>(var: &'static str, lookup: &F, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value,
    })
}

fn parse_cors(raw: &str) -> Result<CorsPolicy, ConfigError> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsPolicy::Any);
    }

    origins
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                value: origin.to_string(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsPolicy::List)
}
