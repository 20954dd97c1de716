//! Table output formatting for CLI commands
//!
//! Provides formatted table output for rankings, suggestions, and
//! strategies using comfy-table.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};

use crate::domain::models::{ScoredTask, Strategy, Suggestion};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn score_cell(score: f64) -> Cell {
    let cell = Cell::new(format!("{score:.2}"));
    if !console::colors_enabled() {
        return cell;
    }
    if score >= 70.0 {
        cell.fg(Color::Green)
    } else if score >= 40.0 {
        cell.fg(Color::Yellow)
    } else {
        cell.fg(Color::Red)
    }
}

/// Truncate a string to a maximum length, appending "..." if truncated.
fn truncate_text(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let prefix: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{prefix}...")
    }
}

/// Format a ranked batch as a table, highest score first.
pub fn format_ranking_table(tasks: &[ScoredTask]) -> String {
    let mut table = base_table();
    table.set_header(vec![
        header("Rank"),
        header("ID"),
        header("Title"),
        header("Score"),
        header("Due"),
        header("Hours"),
        header("Importance"),
    ]);

    for (rank, task) in tasks.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(task.id),
            Cell::new(truncate_text(&task.title, 40)),
            score_cell(task.score),
            Cell::new(task.due_date.as_deref().unwrap_or("-")),
            Cell::new(format!("{}", task.estimated_hours)),
            Cell::new(task.importance),
        ]);
    }

    table.to_string()
}

/// Format top-N suggestions as a table.
pub fn format_suggestions_table(suggestions: &[Suggestion]) -> String {
    let mut table = base_table();
    table.set_header(vec![
        header("ID"),
        header("Title"),
        header("Score"),
        header("Why"),
    ]);

    for suggestion in suggestions {
        table.add_row(vec![
            Cell::new(suggestion.id),
            Cell::new(truncate_text(&suggestion.title, 40)),
            score_cell(suggestion.score),
            Cell::new(&suggestion.why),
        ]);
    }

    table.to_string()
}

/// Format the strategy weight profiles as a table.
pub fn format_strategies_table() -> String {
    let mut table = base_table();
    table.set_header(vec![
        header("Strategy"),
        header("Urgency"),
        header("Importance"),
        header("Effort"),
        header("Dependencies"),
    ]);

    for strategy in Strategy::ALL {
        let w = strategy.weights();
        table.add_row(vec![
            Cell::new(strategy.as_str()),
            Cell::new(format!("{:.2}", w.urgency)),
            Cell::new(format!("{:.2}", w.importance)),
            Cell::new(format!("{:.2}", w.effort)),
            Cell::new(format!("{:.2}", w.dependencies)),
        ]);
    }

    table.to_string()
}
