//! Database layer - connection pool, schema, seeding and repositories
//!
//! - One statement per operation, counters incremented inside the database
//! - Seeding keyed on emptiness, never upsert
//! - Handlers reach storage only through the injected [`TrackerStore`]

pub mod error;
pub mod memory;
pub mod pool;
pub mod repos;
pub mod schema;
pub mod seed;
pub mod store;

pub use error::DbError;
pub use memory::MemoryStore;
pub use pool::create_pool;
pub use seed::SeedReport;
pub use store::{PgStore, TrackerStore};

use sqlx::PgPool;

/// Create missing tables, then seed the empty ones.
///
/// Any failure here must stop startup before the listener is bound.
pub async fn initialize(pool: &PgPool) -> Result<SeedReport, DbError> {
    schema::run(pool).await?;
    seed::run(pool).await
}
