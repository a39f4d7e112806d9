//! Tool repository (voting board)

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::Tool;

/// Tool repository
pub struct ToolRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ToolRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Category ascending, votes descending within a category.
    ///
    /// Categories compare byte-wise so the order doesn't depend on the
    /// server's locale ("CI/CD" before "Cloud" before "Containers").
    pub async fn list(&self) -> Result<Vec<Tool>, DbError> {
        let rows = sqlx::query_as::<_, Tool>(
            r#"
            SELECT id, name, category, votes
            FROM tools
            ORDER BY category COLLATE "C", votes DESC, id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Add one vote and return the updated tool.
    pub async fn vote(&self, id: i32) -> Result<Option<Tool>, DbError> {
        let row = sqlx::query_as::<_, Tool>(
            r#"
            UPDATE tools
            SET votes = votes + 1
            WHERE id = $1
            RETURNING id, name, category, votes
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
    async fn list_respects_board_order() {
        let config = DatabaseConfig::from_env().expect("DATABASE_URL required");
        let pool = create_pool(&config).await.expect("pool creation failed");
        initialize(&pool).await.expect("initialization failed");

        let tools = ToolRepo::new(&pool).list().await.unwrap();
        for pair in tools.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.category < b.category || (a.category == b.category && a.votes >= b.votes),
                "{:?} before {:?}",
                a,
                b
            );
        }
    }
}
