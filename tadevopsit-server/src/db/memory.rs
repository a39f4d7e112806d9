//! In-process store with the same ordering and update rules as PostgreSQL.
//!
//! Serves as the test double for handler tests; no database required.

use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;
use tokio::sync::Mutex;

use super::seed::{SeedReport, SEED_QUOTES, SEED_TOOLS};
use super::store::TrackerStore;
use super::DbError;
use crate::models::{board_order, ProgressEntry, ProgressUpdate, Quote, Tool, PLAN_DAYS};

#[derive(Default)]
struct Tables {
    progress: Vec<ProgressEntry>,
    quotes: Vec<Quote>,
    tools: Vec<Tool>,
}

/// Memory-backed [`TrackerStore`]
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    /// Store with no rows at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store with the rows a fresh database gets on first start
    pub async fn seeded() -> Self {
        let store = Self::empty();
        store.seed().await;
        store
    }

    /// Store holding exactly the given rows
    pub fn with_rows(progress: Vec<ProgressEntry>, quotes: Vec<Quote>, tools: Vec<Tool>) -> Self {
        Self {
            tables: Mutex::new(Tables {
                progress,
                quotes,
                tools,
            }),
        }
    }

    /// Seed every empty table, same rule as the database seeding pass.
    pub async fn seed(&self) -> SeedReport {
        let mut tables = self.tables.lock().await;
        let mut report = SeedReport::default();

        if tables.progress.is_empty() {
            tables.progress = (1..=PLAN_DAYS)
                .map(|day| ProgressEntry {
                    id: day,
                    day,
                    completed: false,
                    feedback: None,
                    completed_at: None,
                })
                .collect();
            report.progress = tables.progress.len() as u64;
        }

        if tables.quotes.is_empty() {
            tables.quotes = SEED_QUOTES
                .iter()
                .zip(1..)
                .map(|(q, id)| Quote {
                    id,
                    text: q.text.to_string(),
                    author: Some(q.author.to_string()),
                    category: Some(q.category.to_string()),
                    favorites: 0,
                })
                .collect();
            report.quotes = tables.quotes.len() as u64;
        }

        if tables.tools.is_empty() {
            tables.tools = SEED_TOOLS
                .iter()
                .zip(1..)
                .map(|(t, id)| Tool {
                    id,
                    name: t.name.to_string(),
                    category: t.category.to_string(),
                    votes: 0,
                })
                .collect();
            report.tools = tables.tools.len() as u64;
        }

        report
    }
}

#[async_trait]
impl TrackerStore for MemoryStore {
    async fn list_progress(&self) -> Result<Vec<ProgressEntry>, DbError> {
        let mut rows = self.tables.lock().await.progress.clone();
        rows.sort_by_key(|p| p.day);
        Ok(rows)
    }

    async fn update_progress(
        &self,
        day: i32,
        update: ProgressUpdate,
    ) -> Result<Option<ProgressEntry>, DbError> {
        let mut tables = self.tables.lock().await;
        let Some(entry) = tables.progress.iter_mut().find(|p| p.day == day) else {
            return Ok(None);
        };

        entry.completed = update.completed;
        entry.feedback = update.feedback;
        entry.completed_at = update.completed.then(Utc::now);
        Ok(Some(entry.clone()))
    }

    async fn list_quotes(&self) -> Result<Vec<Quote>, DbError> {
        let mut rows = self.tables.lock().await.quotes.clone();
        rows.sort_by(|a, b| b.favorites.cmp(&a.favorites).then_with(|| a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn random_quote(&self) -> Result<Option<Quote>, DbError> {
        let tables = self.tables.lock().await;
        Ok(tables.quotes.choose(&mut rand::thread_rng()).cloned())
    }

    async fn favorite_quote(&self, id: i32) -> Result<Option<Quote>, DbError> {
        let mut tables = self.tables.lock().await;
        Ok(tables.quotes.iter_mut().find(|q| q.id == id).map(|quote| {
            quote.favorites += 1;
            quote.clone()
        }))
    }

    async fn list_tools(&self) -> Result<Vec<Tool>, DbError> {
        let mut rows = self.tables.lock().await.tools.clone();
        rows.sort_by(board_order);
        Ok(rows)
    }

    async fn vote_tool(&self, id: i32) -> Result<Option<Tool>, DbError> {
        let mut tables = self.tables.lock().await;
        Ok(tables.tools.iter_mut().find(|t| t.id == id).map(|tool| {
            tool.votes += 1;
            tool.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let store = MemoryStore::seeded().await;
        let second = store.seed().await;

        assert_eq!(second.total(), 0);
        assert_eq!(store.list_progress().await.unwrap().len(), 30);
        assert_eq!(store.list_quotes().await.unwrap().len(), SEED_QUOTES.len());
        assert_eq!(store.list_tools().await.unwrap().len(), SEED_TOOLS.len());
    }

    #[tokio::test]
    async fn every_day_round_trips() {
        let store = MemoryStore::seeded().await;

        for day in 1..=PLAN_DAYS {
            let update = ProgressUpdate {
                completed: true,
                feedback: Some("x".into()),
            };
            store.update_progress(day, update).await.unwrap().unwrap();
        }

        for entry in store.list_progress().await.unwrap() {
            assert!(entry.completed);
            assert_eq!(entry.feedback.as_deref(), Some("x"));
            assert!(entry.completed_at.is_some());
        }
    }

    #[tokio::test]
    async fn toggle_off_clears_timestamp() {
        let store = MemoryStore::seeded().await;
        let done = ProgressUpdate {
            completed: true,
            feedback: Some("done".into()),
        };
        store.update_progress(3, done).await.unwrap();

        let undone = ProgressUpdate {
            completed: false,
            feedback: None,
        };
        let entry = store.update_progress(3, undone).await.unwrap().unwrap();
        assert!(!entry.completed);
        assert!(entry.completed_at.is_none());
        assert!(entry.feedback.is_none());
    }

    #[tokio::test]
    async fn unknown_day_creates_nothing() {
        let store = MemoryStore::seeded().await;
        let update = ProgressUpdate {
            completed: true,
            feedback: None,
        };

        assert!(store.update_progress(31, update).await.unwrap().is_none());
        assert_eq!(store.list_progress().await.unwrap().len(), 30);
    }

    #[tokio::test]
    async fn favorite_touches_only_its_quote() {
        let store = MemoryStore::seeded().await;
        let before = store.list_quotes().await.unwrap();

        let updated = store.favorite_quote(4).await.unwrap().unwrap();
        assert_eq!(updated.favorites, 1);

        let after = store.list_quotes().await.unwrap();
        for quote in &after {
            let old = before.iter().find(|q| q.id == quote.id).unwrap();
            let expected = if quote.id == 4 { old.favorites + 1 } else { old.favorites };
            assert_eq!(quote.favorites, expected);
        }
        assert_eq!(after[0].id, 4);
    }

    #[tokio::test]
    async fn vote_touches_only_its_tool() {
        let store = MemoryStore::seeded().await;
        let before = store.list_tools().await.unwrap();

        let updated = store.vote_tool(6).await.unwrap().unwrap();
        assert_eq!(updated.votes, 1);

        for tool in store.list_tools().await.unwrap() {
            let old = before.iter().find(|t| t.id == tool.id).unwrap();
            let expected = if tool.id == 6 { old.votes + 1 } else { old.votes };
            assert_eq!(tool.votes, expected);
        }
    }

    #[tokio::test]
    async fn unknown_ids_are_none() {
        let store = MemoryStore::seeded().await;
        assert!(store.favorite_quote(999).await.unwrap().is_none());
        assert!(store.vote_tool(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn random_quote_on_empty_store_is_none() {
        let store = MemoryStore::empty();
        assert!(store.random_quote().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn random_quote_comes_from_the_set() {
        let store = MemoryStore::seeded().await;
        let quote = store.random_quote().await.unwrap().unwrap();
        assert!(SEED_QUOTES.iter().any(|q| q.text == quote.text));
    }
}
