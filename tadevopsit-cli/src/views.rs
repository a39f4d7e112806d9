//! Terminal views: progress grid, quote feed, voting board
//!
//! Renderers return strings so commands decide where output goes.

use std::fmt::Write;

use tadevopsit_server::models::{ProgressEntry, ProgressSummary, Quote, Tool};

const GRID_COLUMNS: usize = 6;
const BAR_WIDTH: usize = 30;

/// Replace the row matching `updated` with the server's copy.
///
/// Returns false when no local row matched; the list is left unchanged.
pub fn apply_update<T>(rows: &mut [T], updated: T, same: impl Fn(&T, &T) -> bool) -> bool {
    match rows.iter_mut().find(|row| same(row, &updated)) {
        Some(row) => {
            *row = updated;
            true
        }
        None => false,
    }
}

// ============================================================================
// Progress
// ============================================================================

pub fn render_progress(entries: &[ProgressEntry]) -> String {
    let summary = ProgressSummary::from_entries(entries);
    let filled = (summary.completed * BAR_WIDTH) / summary.total.max(1);

    let mut out = String::new();
    let _ = writeln!(out, "┌─ Your DevOps Journey");
    let _ = writeln!(out, "│  {}/{} days", summary.completed, summary.total);
    let _ = writeln!(
        out,
        "│  {}{} {:.1}% complete",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH.saturating_sub(filled)),
        summary.percentage()
    );
    let _ = writeln!(out, "│");

    for row in entries.chunks(GRID_COLUMNS) {
        let cells: Vec<String> = row
            .iter()
            .map(|e| format!("[{:>2} {}]", e.day, if e.completed { "✓" } else { " " }))
            .collect();
        let _ = writeln!(out, "│  {}", cells.join(" "));
    }

    let notes: Vec<&ProgressEntry> = entries
        .iter()
        .filter(|e| e.feedback.is_some() || e.completed_at.is_some())
        .collect();
    if !notes.is_empty() {
        let _ = writeln!(out, "│");
        for entry in notes {
            let mut line = format!("│  Day {:>2}", entry.day);
            if let Some(at) = entry.completed_at {
                let _ = write!(line, " @ {}", at.format("%Y-%m-%d"));
            }
            if let Some(feedback) = &entry.feedback {
                let _ = write!(line, ": {}", feedback);
            }
            let _ = writeln!(out, "{}", line);
        }
    }

    out.push_str("└──────────────────────────────────────────\n");
    out
}

// ============================================================================
// Quotes
// ============================================================================

pub fn render_quote(quote: &Quote) -> String {
    let mut out = format!("#{:<3} ♥ {:<3} \"{}\"\n", quote.id, quote.favorites, quote.text);
    let author = quote.author.as_deref().unwrap_or("Unknown");
    match &quote.category {
        Some(category) => {
            let _ = writeln!(out, "         - {} [{}]", author, category);
        }
        None => {
            let _ = writeln!(out, "         - {}", author);
        }
    }
    out
}

/// Quote feed in server order, optionally limited to one category
pub fn render_quotes(quotes: &[Quote], category: Option<&str>) -> String {
    let shown: Vec<&Quote> = quotes
        .iter()
        .filter(|q| category.map_or(true, |c| q.category.as_deref() == Some(c)))
        .collect();

    let mut out = String::from("┌─ DevOps Quotes & Tips\n│\n");
    if shown.is_empty() {
        out.push_str("│  (no quotes)\n");
    }
    for quote in shown {
        for line in render_quote(quote).lines() {
            let _ = writeln!(out, "│  {}", line);
        }
    }
    out.push_str("└──────────────────────────────────────────\n");
    out
}

// ============================================================================
// Voting
// ============================================================================

/// Tools grouped by category for display
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub tools: Vec<Tool>,
}

/// Group tools by category, keeping categories in first-appearance order and
/// sorting each group by votes descending.
pub fn group_tools(tools: &[Tool], category: Option<&str>) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for tool in tools.iter().filter(|t| category.map_or(true, |c| t.category == c)) {
        match groups.iter_mut().find(|g| g.category == tool.category) {
            Some(group) => group.tools.push(tool.clone()),
            None => groups.push(CategoryGroup {
                category: tool.category.clone(),
                tools: vec![tool.clone()],
            }),
        }
    }

    for group in &mut groups {
        group.tools.sort_by(|a, b| b.votes.cmp(&a.votes));
    }
    groups
}

pub fn render_board(tools: &[Tool], category: Option<&str>) -> String {
    let groups = group_tools(tools, category);

    let mut out = String::from("┌─ DevOps Tool Voting\n");
    if groups.is_empty() {
        out.push_str("│\n│  (no tools)\n");
    }
    for group in groups {
        let _ = writeln!(out, "│\n├─ {}", group.category);
        for (rank, tool) in group.tools.iter().enumerate() {
            // Leader badge only once someone has voted
            let badge = if rank == 0 && tool.votes > 0 { "★" } else { " " };
            let _ = writeln!(
                out,
                "│  {} #{:<3} {:<16} {:>4} votes",
                badge, tool.id, tool.name, tool.votes
            );
        }
    }
    out.push_str("└──────────────────────────────────────────\n");
    out
}
