//! One-time seeding of empty tables
//!
//! Each table is seeded only while it has no rows. Once any row exists the
//! table is left alone, so later edits to the seed lists never reach an
//! existing database.

use sqlx::{PgPool, Postgres, Transaction};

use super::DbError;
use crate::models::PLAN_DAYS;

/// A quote inserted on first start
#[derive(Debug, Clone, Copy)]
pub struct SeedQuote {
    pub text: &'static str,
    pub author: &'static str,
    pub category: &'static str,
}

/// A tool inserted on first start
#[derive(Debug, Clone, Copy)]
pub struct SeedTool {
    pub name: &'static str,
    pub category: &'static str,
}

pub const SEED_QUOTES: &[SeedQuote] = &[
    SeedQuote {
        text: "There is no such thing as DevOps - it's a culture, not a tool",
        author: "Unknown",
        category: "Culture",
    },
    SeedQuote {
        text: "You build it, you run it",
        author: "Werner Vogels",
        category: "Responsibility",
    },
    SeedQuote {
        text: "Automate everything you can, monitor everything you automate",
        author: "DevOps Wisdom",
        category: "Automation",
    },
    SeedQuote {
        text: "Fail fast, learn faster",
        author: "DevOps Community",
        category: "Learning",
    },
    SeedQuote {
        text: "Infrastructure as Code: If it's not in Git, it doesn't exist",
        author: "DevOps Principle",
        category: "IaC",
    },
    SeedQuote {
        text: "Containers are not VMs, and that's the point",
        author: "Docker Community",
        category: "Containers",
    },
    SeedQuote {
        text: "Configuration management is the foundation of reliability",
        author: "SRE Handbook",
        category: "Configuration",
    },
    SeedQuote {
        text: "Monitor your monitors",
        author: "Monitoring Best Practice",
        category: "Monitoring",
    },
];

pub const SEED_TOOLS: &[SeedTool] = &[
    SeedTool {
        name: "Jenkins",
        category: "CI/CD",
    },
    SeedTool {
        name: "GitHub Actions",
        category: "CI/CD",
    },
    SeedTool {
        name: "GitLab CI",
        category: "CI/CD",
    },
    SeedTool {
        name: "CircleCI",
        category: "CI/CD",
    },
    SeedTool {
        name: "Docker",
        category: "Containers",
    },
    SeedTool {
        name: "Kubernetes",
        category: "Containers",
    },
    SeedTool {
        name: "Docker Swarm",
        category: "Containers",
    },
    SeedTool {
        name: "Podman",
        category: "Containers",
    },
    SeedTool {
        name: "AWS",
        category: "Cloud",
    },
    SeedTool {
        name: "Azure",
        category: "Cloud",
    },
    SeedTool {
        name: "Google Cloud",
        category: "Cloud",
    },
    SeedTool {
        name: "DigitalOcean",
        category: "Cloud",
    },
    SeedTool {
        name: "Prometheus",
        category: "Monitoring",
    },
    SeedTool {
        name: "Grafana",
        category: "Monitoring",
    },
    SeedTool {
        name: "Datadog",
        category: "Monitoring",
    },
    SeedTool {
        name: "New Relic",
        category: "Monitoring",
    },
];

/// Rows inserted per table by one seeding pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub progress: u64,
    pub quotes: u64,
    pub tools: u64,
}

impl SeedReport {
    pub fn total(&self) -> u64 {
        self.progress + self.quotes + self.tools
    }
}

/// Seed every empty table.
///
/// Each table is handled in its own transaction holding a lock that conflicts
/// with itself, so two processes starting at once cannot both see an empty
/// table and insert twice.
pub async fn run(pool: &PgPool) -> Result<SeedReport, DbError> {
    let report = SeedReport {
        progress: seed_progress(pool).await?,
        quotes: seed_quotes(pool).await?,
        tools: seed_tools(pool).await?,
    };

    tracing::info!(
        progress = report.progress,
        quotes = report.quotes,
        tools = report.tools,
        "Seeding complete"
    );
    Ok(report)
}

/// Lock `table` for the transaction and report whether it has no rows.
async fn lock_if_empty(tx: &mut Transaction<'_, Postgres>, table: &str) -> Result<bool, DbError> {
    sqlx::query(&format!("LOCK TABLE {} IN SHARE ROW EXCLUSIVE MODE", table))
        .execute(&mut **tx)
        .await?;

    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(&mut **tx)
        .await?;

    if count > 0 {
        tracing::debug!(table, rows = count, "Table already populated, skipping seed");
    }
    Ok(count == 0)
}

async fn seed_progress(pool: &PgPool) -> Result<u64, DbError> {
    let mut tx = pool.begin().await?;
    if !lock_if_empty(&mut tx, "progress").await? {
        return Ok(0);
    }

    let inserted = sqlx::query("INSERT INTO progress (day) SELECT generate_series(1, $1)")
        .bind(PLAN_DAYS)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;
    Ok(inserted)
}

async fn seed_quotes(pool: &PgPool) -> Result<u64, DbError> {
    let mut tx = pool.begin().await?;
    if !lock_if_empty(&mut tx, "quotes").await? {
        return Ok(0);
    }

    let mut inserted = 0;
    for quote in SEED_QUOTES {
        inserted += sqlx::query("INSERT INTO quotes (text, author, category) VALUES ($1, $2, $3)")
            .bind(quote.text)
            .bind(quote.author)
            .bind(quote.category)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}

async fn seed_tools(pool: &PgPool) -> Result<u64, DbError> {
    let mut tx = pool.begin().await?;
    if !lock_if_empty(&mut tx, "tools").await? {
        return Ok(0);
    }

    let mut inserted = 0;
    for tool in SEED_TOOLS {
        inserted += sqlx::query("INSERT INTO tools (name, category) VALUES ($1, $2)")
            .bind(tool.name)
            .bind(tool.category)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}
