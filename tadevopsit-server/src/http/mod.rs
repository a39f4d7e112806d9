//! HTTP server layer
//!
//! Axum server with:
//! - One handler per endpoint, one storage call per handler
//! - Writes run on their own task and finish even if the client disconnects
//! - Typed path/body extraction (400 on malformed input)
//! - JSON error responses: 400 / 404 / 413 / 503 / 500

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig, ServerError};
