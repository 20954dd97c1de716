//! Analysis result models.
//!
//! A snapshot captures one completed ranking so the suggestion read path
//! can serve "what should I do next" queries without re-running the
//! engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::strategy::Strategy;
use super::task::ScoredTask;

/// One completed analysis, stored by an
/// [`AnalysisStore`](crate::domain::ports::AnalysisStore).
///
/// Snapshots are versioned: each successful analysis bumps the version,
/// so readers can tell whether the ranking they hold is current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    /// Monotonically increasing snapshot version, starting at 1.
    pub version: u64,
    /// Strategy the batch was ranked under.
    pub strategy: Strategy,
    /// When the analysis completed.
    pub analyzed_at: DateTime<Utc>,
    /// The full ranked batch, descending by score.
    pub tasks: Vec<ScoredTask>,
}

/// A single entry of the top-N suggestion read path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Task id.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Composite score from the source snapshot.
    pub score: f64,
    /// Short rationale built from the task's explanation string.
    pub why: String,
}

impl Suggestion {
    /// Build a suggestion from a ranked task.
    pub fn from_scored(task: &ScoredTask) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            score: task.score,
            why: format!("Score components: {}", task.explanation),
        }
    }
}
