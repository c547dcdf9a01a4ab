//! Database connection settings.
//!
//! Read from the process environment (and a `.env` file when present):
//!
//! | variable | default |
//! |---|---|
//! | `DATABASE_URL` | required |
//! | `NURSERY_DB_MAX_CONNECTIONS` | 5 |
//! | `NURSERY_DB_ACQUIRE_TIMEOUT_SECS` | 30 |

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const MAX_CONNECTIONS_VAR: &str = "NURSERY_DB_MAX_CONNECTIONS";
pub const ACQUIRE_TIMEOUT_VAR: &str = "NURSERY_DB_ACQUIRE_TIMEOUT_SECS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
    pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: Self::DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Self::DEFAULT_ACQUIRE_TIMEOUT,
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup(DATABASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;

        let mut config = Self::new(url);
        if let Some(value) = lookup(MAX_CONNECTIONS_VAR) {
            config.max_connections = parse_setting(MAX_CONNECTIONS_VAR, &value)?;
        }
        if let Some(value) = lookup(ACQUIRE_TIMEOUT_VAR) {
            config.acquire_timeout = Duration::from_secs(parse_setting(ACQUIRE_TIMEOUT_VAR, &value)?);
        }
        Ok(config)
    }

    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        info!(
            max_connections = self.max_connections,
            acquire_timeout_secs = self.acquire_timeout.as_secs(),
            "connecting to nursery database"
        );
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect(&self.url)
            .await
    }
}

fn parse_setting<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
