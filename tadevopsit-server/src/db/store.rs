//! Storage handle injected into the HTTP layer
//!
//! Handlers only see `dyn TrackerStore`. Production wires in [`PgStore`];
//! tests use [`MemoryStore`](super::MemoryStore).

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{ProgressRepo, QuoteRepo, ToolRepo};
use super::DbError;
use crate::models::{ProgressEntry, ProgressUpdate, Quote, Tool};

/// One method per (entity, operation). `None` means the target row doesn't
/// exist (or, for `random_quote`, that there is nothing to pick).
#[async_trait]
pub trait TrackerStore: Send + Sync {
    async fn list_progress(&self) -> Result<Vec<ProgressEntry>, DbError>;

    async fn update_progress(
        &self,
        day: i32,
        update: ProgressUpdate,
    ) -> Result<Option<ProgressEntry>, DbError>;

    async fn list_quotes(&self) -> Result<Vec<Quote>, DbError>;

    async fn random_quote(&self) -> Result<Option<Quote>, DbError>;

    async fn favorite_quote(&self, id: i32) -> Result<Option<Quote>, DbError>;

    async fn list_tools(&self) -> Result<Vec<Tool>, DbError>;

    async fn vote_tool(&self, id: i32) -> Result<Option<Tool>, DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TrackerStore for PgStore {
    async fn list_progress(&self) -> Result<Vec<ProgressEntry>, DbError> {
        ProgressRepo::new(&self.pool).list().await
    }

    async fn update_progress(
        &self,
        day: i32,
        update: ProgressUpdate,
    ) -> Result<Option<ProgressEntry>, DbError> {
        ProgressRepo::new(&self.pool).update(day, &update).await
    }

    async fn list_quotes(&self) -> Result<Vec<Quote>, DbError> {
        QuoteRepo::new(&self.pool).list().await
    }

    async fn random_quote(&self) -> Result<Option<Quote>, DbError> {
        QuoteRepo::new(&self.pool).random().await
    }

    async fn favorite_quote(&self, id: i32) -> Result<Option<Quote>, DbError> {
        QuoteRepo::new(&self.pool).favorite(id).await
    }

    async fn list_tools(&self) -> Result<Vec<Tool>, DbError> {
        ToolRepo::new(&self.pool).list().await
    }

    async fn vote_tool(&self, id: i32) -> Result<Option<Tool>, DbError> {
        ToolRepo::new(&self.pool).vote(id).await
    }
}
