//! Tools on the voting board

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A votable tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tool {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub votes: i32,
}

/// Board order: category ascending (byte-wise), votes descending, then id.
pub fn board_order(a: &Tool, b: &Tool) -> Ordering {
    a.category
        .as_bytes()
        .cmp(b.category.as_bytes())
        .then_with(|| b.votes.cmp(&a.votes))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(id: i32, name: &str, category: &str, votes: i32) -> Tool {
        Tool {
            id,
            name: name.into(),
            category: category.into(),
            votes,
        }
    }

    #[test]
    fn cicd_sorts_before_containers() {
        let mut tools = vec![
            tool(1, "Docker", "Containers", 10),
            tool(2, "Kubernetes", "Containers", 8),
            tool(3, "Jenkins", "CI/CD", 15),
        ];
        tools.sort_by(board_order);
        let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Jenkins", "Docker", "Kubernetes"]);
    }

    #[test]
    fn votes_descending_within_category() {
        let mut tools = vec![
            tool(1, "AWS", "Cloud", 1),
            tool(2, "Azure", "Cloud", 7),
            tool(3, "Google Cloud", "Cloud", 7),
        ];
        tools.sort_by(board_order);
        let ids: Vec<_> = tools.iter().map(|t| t.id).collect();
        assert_eq!(ids, [2, 3, 1]);
    }
}
