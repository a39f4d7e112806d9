//! Command implementations for the tadevopsit CLI

pub mod progress;
pub mod quotes;
pub mod serve;
pub mod voting;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::client::{ApiClient, HealthStatus, DEFAULT_ENDPOINT};

pub use progress::run_progress;
pub use quotes::run_quotes;
pub use serve::run_serve;
pub use voting::run_voting;

/// Connection options shared by the client commands
#[derive(Parser, Debug, Clone)]
pub struct ApiArgs {
    /// API base URL
    #[arg(long, env = "TADEVOPSIT_API_URL", default_value = DEFAULT_ENDPOINT, global = true)]
    pub endpoint: String,

    /// Print raw JSON instead of the rendered view
    #[arg(long, global = true)]
    pub json: bool,
}

impl ApiArgs {
    pub fn client(&self) -> Result<ApiClient> {
        ApiClient::new(&self.endpoint)
    }
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Check that the API answers its health endpoint
pub async fn run_health(api: ApiArgs) -> Result<()> {
    let client = api.client()?;
    let health = client.health().await?;
    if api.json {
        println!(
            "{}",
            serde_json::json!({
                "endpoint": client.endpoint(),
                "status": health.status,
                "message": health.message,
            })
        );
    } else {
        println!("{}", health_line(&health, client.endpoint()));
    }
    Ok(())
}

fn health_line(health: &HealthStatus, endpoint: &str) -> String {
    format!("✓ {} ({}) at {}", health.message, health.status, endpoint)
}
