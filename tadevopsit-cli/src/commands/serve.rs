//! HTTP server command
//!
//! Boot order: config, pool, schema + seed, then bind. Any failure before
//! the bind aborts the process without opening a port.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use tadevopsit_server::db::{create_pool, initialize, PgStore};
use tadevopsit_server::http::{run_server, ServerConfig};
use tadevopsit_server::{AppState, DatabaseConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, env = "TADEVOPSIT_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// PostgreSQL connection string (required)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "TADEVOPSIT_DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    /// Seconds a request waits for a free connection before failing with 503
    #[arg(long, env = "TADEVOPSIT_DB_ACQUIRE_TIMEOUT", default_value_t = 5)]
    pub acquire_timeout_secs: u64,

    /// Only accept browser requests from localhost front-end origins
    #[arg(long)]
    pub cors_localhost: bool,
}

impl ServeArgs {
    fn database_config(&self) -> Result<DatabaseConfig> {
        let config = DatabaseConfig::new(self.database_url.clone().unwrap_or_default())?
            .with_max_connections(self.max_connections)
            .with_acquire_timeout(Duration::from_secs(self.acquire_timeout_secs));
        Ok(config)
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_permissive: !self.cors_localhost,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.database_config()?;
    let server_config = args.server_config();

    tracing::info!("Starting TaDevOpsit API on {}", server_config.bind_addr);

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;

    let seeded = initialize(&pool)
        .await
        .context("Failed to initialize database")?;
    if seeded.total() > 0 {
        tracing::info!(rows = seeded.total(), "Seeded empty tables");
    }

    let state = AppState::new(Arc::new(PgStore::new(pool)));

    // Run server (blocks until shutdown)
    run_server(state, server_config)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(database_url: Option<&str>) -> ServeArgs {
        ServeArgs {
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            database_url: database_url.map(String::from),
            max_connections: 4,
            acquire_timeout_secs: 2,
            cors_localhost: true,
        }
    }

    #[test]
    fn missing_database_url_is_rejected() {
        let err = args(None).database_config().unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL not set"));
    }

    #[test]
    fn pool_settings_carry_through() {
        let config = args(Some("postgres://db/app")).database_config().unwrap();
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.acquire_timeout, Duration::from_secs(2));
    }

    #[test]
    fn bind_address_and_cors() {
        let config = args(None).server_config();
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
        assert!(!config.cors_permissive);
    }
}
