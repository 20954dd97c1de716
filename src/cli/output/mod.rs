//! Output formatting utilities for the CLI.

pub mod table;

pub use table::{format_ranking_table, format_strategies_table, format_suggestions_table};
