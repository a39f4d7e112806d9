//! Progress entries for the 30-day learning plan

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of days in the plan. One row per day exists at all times.
pub const PLAN_DAYS: i32 = 30;

/// One day of the learning plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProgressEntry {
    pub id: i32,
    pub day: i32,
    pub completed: bool,
    pub feedback: Option<String>,
    /// Set when `completed` is written as true, cleared when written as false
    pub completed_at: Option<DateTime<Utc>>,
}

/// Body of `PUT /progress/{day}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub completed: bool,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Completion overview shown above the progress grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
}

impl ProgressSummary {
    pub fn from_entries(entries: &[ProgressEntry]) -> Self {
        Self {
            completed: entries.iter().filter(|e| e.completed).count(),
            total: PLAN_DAYS as usize,
        }
    }

    /// Completion percentage against the full plan, not the rows received
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: i32, completed: bool) -> ProgressEntry {
        ProgressEntry {
            id: day,
            day,
            completed,
            feedback: None,
            completed_at: None,
        }
    }

    #[test]
    fn update_without_feedback_field_is_null() {
        let update: ProgressUpdate = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert!(update.completed);
        assert_eq!(update.feedback, None);
    }

    #[test]
    fn update_requires_completed() {
        let result = serde_json::from_str::<ProgressUpdate>(r#"{"feedback":"hi"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn summary_counts_completed_days() {
        let entries: Vec<_> = (1..=PLAN_DAYS).map(|d| entry(d, d % 3 == 0)).collect();
        let summary = ProgressSummary::from_entries(&entries);
        assert_eq!(summary.completed, 10);
        assert_eq!(summary.total, 30);
        assert_eq!(format!("{:.1}", summary.percentage()), "33.3");
    }

    #[test]
    fn entry_serializes_absent_timestamp_as_null() {
        let json = serde_json::to_value(entry(4, false)).unwrap();
        assert_eq!(json["completed_at"], serde_json::Value::Null);
        assert_eq!(json["feedback"], serde_json::Value::Null);
    }
}
