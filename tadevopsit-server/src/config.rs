//! Database configuration
//!
//! Environment variables:
//!   DATABASE_URL                    # PostgreSQL connection string (required)
//!   TADEVOPSIT_DB_MAX_CONNECTIONS   # Pool size (default: 10)
//!   TADEVOPSIT_DB_ACQUIRE_TIMEOUT   # Seconds to wait for a free connection (default: 5)

use std::time::Duration;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")]
    MissingDatabaseUrl,

    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Connection settings for the PostgreSQL pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Upper bound on waiting for a pooled connection
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Config with default pool settings. A blank URL counts as missing.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(ConfigError::MissingDatabaseUrl);
        }

        Ok(Self {
            url,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        })
    }

    /// Read the config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?;
        let mut config = Self::new(url)?;

        if let Some(value) = lookup("TADEVOPSIT_DB_MAX_CONNECTIONS") {
            config.max_connections = parse_value("TADEVOPSIT_DB_MAX_CONNECTIONS", &value)?;
        }
        if let Some(value) = lookup("TADEVOPSIT_DB_ACQUIRE_TIMEOUT") {
            let secs: u64 = parse_value("TADEVOPSIT_DB_ACQUIRE_TIMEOUT", &value)?;
            config.acquire_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }

    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
