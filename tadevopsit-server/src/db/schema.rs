//! Table creation
//!
//! Create-if-not-exists only. There are no migrations beyond this; the three
//! tables are independent and carry no foreign keys. An existing table is
//! left as it is, including a `progress.completed_at` declared as plain
//! `TIMESTAMP`; reads cast it to `timestamptz`.

use sqlx::PgPool;

use super::DbError;

/// Create the progress, quotes and tools tables if they are missing
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring database schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS progress (
            id SERIAL PRIMARY KEY,
            day INTEGER NOT NULL UNIQUE,
            completed BOOLEAN NOT NULL DEFAULT FALSE,
            feedback TEXT,
            completed_at TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quotes (
            id SERIAL PRIMARY KEY,
            text TEXT NOT NULL,
            author VARCHAR(255),
            category VARCHAR(100),
            favorites INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tools (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            category VARCHAR(100) NOT NULL,
            votes INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database schema ready");
    Ok(())
}
