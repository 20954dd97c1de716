//! Batch analysis: graph checks, strategy weighting, and ranking.
//!
//! The pipeline is strictly linear: build the graph, reject cyclic
//! batches, normalize the four metrics, combine them under the selected
//! weight profile, and return the whole batch re-ordered by descending
//! score. The input is never mutated; the output is a fresh set of
//! enriched records.

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::domain::error::AnalysisError;
use crate::domain::models::{ScoredTask, Strategy, TaskInput};
use crate::services::graph::TaskGraph;
use crate::services::metrics::{self, MetricSet};

/// The scoring engine. Stateless; distinct calls are independent and may
/// run concurrently on distinct batches.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskAnalyzer;

impl TaskAnalyzer {
    /// Create a new analyzer.
    pub const fn new() -> Self {
        Self
    }

    /// Analyze a batch as of today (UTC).
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::CircularDependency`] when the in-batch
    /// dependency ids form a directed cycle; no partial ranking is
    /// produced.
    pub fn analyze(
        &self,
        batch: &[TaskInput],
        strategy: Strategy,
    ) -> Result<Vec<ScoredTask>, AnalysisError> {
        self.analyze_on(batch, strategy, Utc::now().date_naive())
    }

    /// Analyze a batch against an explicit reference date.
    ///
    /// Deadline pressure is measured relative to `today`; everything
    /// else is independent of time.
    pub fn analyze_on(
        &self,
        batch: &[TaskInput],
        strategy: Strategy,
        today: NaiveDate,
    ) -> Result<Vec<ScoredTask>, AnalysisError> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        debug!(task_count = batch.len(), %strategy, "analyzing task batch");

        let graph = TaskGraph::build(batch);
        if graph.has_cycle() {
            return Err(AnalysisError::CircularDependency);
        }

        let signals: Vec<_> = graph
            .tasks()
            .iter()
            .map(|task| metrics::extract_signals(task, graph.dependents_count(task.id), today))
            .collect();
        let metric_sets = metrics::normalize_batch(&signals);

        let weights = strategy.weights();
        let mut scored: Vec<ScoredTask> = graph
            .tasks()
            .iter()
            .zip(metric_sets.iter())
            .map(|(task, m)| {
                let raw = weights.urgency * m.urgency
                    + weights.importance * m.importance
                    + weights.effort * m.effort
                    + weights.dependencies * m.dependencies;
                let score = round2(raw * 100.0);
                ScoredTask::from_resolved(task.clone(), score, explanation(m))
            })
            .collect();

        // Stable sort: equal scores keep their input order.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        Ok(scored)
    }
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Human-readable breakdown of the four normalized metrics.
fn explanation(m: &MetricSet) -> String {
    format!(
        "Urgency: {}; Importance: {}; Effort (quick-win): {}; Blocks other tasks: {}",
        round2(m.urgency),
        round2(m.importance),
        round2(m.effort),
        round2(m.dependencies)
    )
}
