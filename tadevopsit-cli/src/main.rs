//! tadevopsit CLI - 30-day DevOps learning tracker
//!
//! - `serve`: run the REST API against PostgreSQL
//! - `progress`: the 30-day grid (list, complete, toggle, reset)
//! - `quotes`: quote feed, random quote, favorites
//! - `voting`: tool voting board
//! - `health`: check that a running API answers

use anyhow::Result;
use clap::{Parser, Subcommand};

mod client;
mod commands;
mod tracing_setup;
mod views;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "tadevopsit",
    author,
    version,
    about = "Track a 30-day DevOps learning plan, collect quotes and vote on tools"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Learning plan progress (list, complete, toggle, reset)
    Progress(commands::progress::ProgressArgs),
    /// Motivational quotes (list, random, favorite)
    Quotes(commands::quotes::QuotesArgs),
    /// Tool voting board (list, vote)
    Voting(commands::voting::VotingArgs),
    /// Check that the API is up
    Health(commands::ApiArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env in the working directory, without overriding the real environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init_tracing(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Progress(args) => commands::run_progress(args).await?,
        Commands::Quotes(args) => commands::run_quotes(args).await?,
        Commands::Voting(args) => commands::run_voting(args).await?,
        Commands::Health(args) => commands::run_health(args).await?,
    }
    Ok(())
}
