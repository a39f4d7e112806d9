//! Repository implementations for database access
//!
//! Every method issues exactly one statement. Counter increments happen
//! inside the UPDATE itself, never as a read followed by a write.

pub mod progress;
pub mod quotes;
pub mod tools;

pub use progress::ProgressRepo;
pub use quotes::QuoteRepo;
pub use tools::ToolRepo;
