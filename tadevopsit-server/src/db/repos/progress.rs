//! Progress repository
//!
//! - list: all 30 days ordered by day
//! - update: single UPDATE ... RETURNING; `completed_at` is decided by the
//!   database clock, never passed in from the application
//!
//! `completed_at` is read through a `timestamptz` cast so tables created
//! with a plain `TIMESTAMP` column decode the same way.

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{ProgressEntry, ProgressUpdate};

/// Progress repository
pub struct ProgressRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProgressRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every day of the plan, ascending.
    pub async fn list(&self) -> Result<Vec<ProgressEntry>, DbError> {
        let rows = sqlx::query_as::<_, ProgressEntry>(
            r#"
            SELECT id, day, completed, feedback, completed_at::timestamptz AS completed_at
            FROM progress
            ORDER BY day
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Overwrite completion and feedback for `day`.
    ///
    /// Returns `None` when no row has that day; nothing is inserted.
    pub async fn update(
        &self,
        day: i32,
        update: &ProgressUpdate,
    ) -> Result<Option<ProgressEntry>, DbError> {
        let row = sqlx::query_as::<_, ProgressEntry>(
            r#"
            UPDATE progress
            SET completed = $1,
                feedback = $2,
                completed_at = CASE WHEN $1 THEN NOW() ELSE NULL END
            WHERE day = $3
            RETURNING id, day, completed, feedback, completed_at::timestamptz AS completed_at
            "#,
        )
        .bind(update.completed)
        .bind(update.feedback.as_deref())
        .bind(day)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }
}
