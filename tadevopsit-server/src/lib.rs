//! tadevopsit-server: REST API for the 30-day DevOps learning tracker
//!
//! Tracks progress through the plan, serves favoritable quotes and runs
//! the tool voting board, all backed by PostgreSQL.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use config::{ConfigError, DatabaseConfig};
pub use state::AppState;
