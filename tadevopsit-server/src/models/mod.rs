//! Domain models shared by the server and the client
//!
//! Rows are returned as stored; path and body input is parsed into typed
//! values before it reaches storage.

pub mod progress;
pub mod quote;
pub mod tool;
pub mod validation;

pub use progress::{ProgressEntry, ProgressSummary, ProgressUpdate, PLAN_DAYS};
pub use quote::Quote;
pub use tool::{board_order, Tool};
pub use validation::ValidationError;
