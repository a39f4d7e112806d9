//! Quote repository

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::Quote;

/// Quote repository
pub struct QuoteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuoteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Most favorited first; equal counts fall back to id.
    pub async fn list(&self) -> Result<Vec<Quote>, DbError> {
        let rows = sqlx::query_as::<_, Quote>(
            r#"
            SELECT id, text, author, category, favorites
            FROM quotes
            ORDER BY favorites DESC, id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// One uniformly random quote, or `None` when the table is empty.
    pub async fn random(&self) -> Result<Option<Quote>, DbError> {
        let row = sqlx::query_as::<_, Quote>(
            r#"
            SELECT id, text, author, category, favorites
            FROM quotes
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Increment-and-return in one statement, so concurrent favorites never
    /// lose an update.
    pub async fn favorite(&self, id: i32) -> Result<Option<Quote>, DbError> {
        let row = sqlx::query_as::<_, Quote>(
            r#"
            UPDATE quotes
            SET favorites = favorites + 1
            WHERE id = $1
            RETURNING id, text, author, category, favorites
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::db::{create_pool, initialize};

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_favorites_are_all_counted() {
        let config = DatabaseConfig::from_env().expect("DATABASE_URL required");
        let pool = create_pool(&config).await.expect("pool creation failed");
        initialize(&pool).await.expect("initialization failed");

        let before = QuoteRepo::new(&pool).list().await.unwrap();
        let target = before.last().expect("seeded quotes").clone();
        let target_id = target.id;

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let pool = pool.clone();
                tokio::spawn(async move { QuoteRepo::new(&pool).favorite(target_id).await })
            })
            .collect();
        for handle in handles {
            handle.await.expect("task panicked").expect("favorite failed");
        }

        let after = QuoteRepo::new(&pool).list().await.unwrap();
        let updated = after.iter().find(|q| q.id == target.id).unwrap();
        assert_eq!(updated.favorites, target.favorites + 20);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn favorite_unknown_id_is_none() {
        let config = DatabaseConfig::from_env().expect("DATABASE_URL required");
        let pool = create_pool(&config).await.expect("pool creation failed");
        initialize(&pool).await.expect("initialization failed");

        assert!(QuoteRepo::new(&pool).favorite(-1).await.unwrap().is_none());
    }
}
