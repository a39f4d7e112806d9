//! Motivational quotes

use serde::{Deserialize, Serialize};

/// A quote with its favorite counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Quote {
    pub id: i32,
    pub text: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub favorites: i32,
}
