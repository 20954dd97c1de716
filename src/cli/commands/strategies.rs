//! `triage strategies` command handler.

use anyhow::Result;

use crate::cli::output::format_strategies_table;
use crate::domain::models::Strategy;

/// Print the available weighting strategies and their weight vectors.
pub fn execute(json: bool) -> Result<()> {
    if json {
        let payload: Vec<_> = Strategy::ALL
            .iter()
            .map(|s| {
                let w = s.weights();
                serde_json::json!({
                    "name": s.as_str(),
                    "default": *s == Strategy::default(),
                    "weights": {
                        "urgency": w.urgency,
                        "importance": w.importance,
                        "effort": w.effort,
                        "dependencies": w.dependencies,
                    },
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("Available strategies (default: {}):", Strategy::default());
        println!("{}", format_strategies_table());
    }

    Ok(())
}
