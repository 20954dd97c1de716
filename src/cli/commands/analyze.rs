//! `triage analyze` command handler.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::output::{format_ranking_table, format_suggestions_table};
use crate::domain::models::{Config, Strategy, TaskInput};
use crate::domain::ports::AnalysisStore;
use crate::services::{validate_batch, SuggestionService, TaskAnalyzer};

/// Read, validate, and rank a task batch file, recording the result
/// into the analysis store.
pub async fn execute(
    file: &Path,
    strategy_name: Option<String>,
    top: Option<Option<usize>>,
    json: bool,
    config: &Config,
    store: Arc<dyn AnalysisStore>,
) -> Result<()> {
    let tasks = read_batch(file)?;
    validate_batch(&tasks).context("Invalid task data")?;

    let strategy = Strategy::from_name(
        strategy_name
            .as_deref()
            .unwrap_or(&config.analysis.default_strategy),
    );

    let ranked = TaskAnalyzer::new().analyze(&tasks, strategy)?;
    info!(task_count = ranked.len(), %strategy, "analysis complete");

    let snapshot = store.record(strategy, ranked).await?;

    if json {
        let payload = serde_json::json!({ "tasks": snapshot.tasks });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("Ranking ({} strategy):", strategy);
        println!("{}", format_ranking_table(&snapshot.tasks));
        println!("\n{} task(s) analyzed", snapshot.tasks.len());
    }

    if let Some(requested) = top {
        let limit = requested.unwrap_or(config.analysis.suggestion_limit);
        let suggestions = SuggestionService::new(store).suggest(limit).await?;
        if json {
            let payload = serde_json::json!({ "suggestions": suggestions });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            println!("\nSuggestions:");
            println!("{}", format_suggestions_table(&suggestions));
        }
    }

    Ok(())
}

/// Parse a batch file as YAML or JSON depending on its extension.
fn read_batch(file: &Path) -> Result<Vec<TaskInput>> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read task file {}", file.display()))?;

    let is_yaml = file
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        serde_yaml::from_str(&raw)
            .with_context(|| format!("Expected a YAML array of tasks in {}", file.display()))
    } else {
        serde_json::from_str(&raw)
            .with_context(|| format!("Expected a JSON array of tasks in {}", file.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_batch_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"title": "A"}}, {{"id": 2, "title": "B", "dependencies": [1]}}]"#
        )
        .unwrap();
        let tasks = read_batch(file.path()).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].dependencies, vec![1]);
    }

    #[test]
    fn test_read_batch_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "- title: A\n- title: B\n  importance: 9\n  due_date: 2025-07-01\n"
        )
        .unwrap();
        let tasks = read_batch(file.path()).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].importance, 9);
        assert_eq!(tasks[1].due_date.as_deref(), Some("2025-07-01"));
    }

    #[test]
    fn test_read_batch_rejects_non_array() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"title": "not a list"}}"#).unwrap();
        assert!(read_batch(file.path()).is_err());
    }
}
