//! Domain-level errors.

use thiserror::Error;

/// Errors raised by the scoring engine.
///
/// The engine has exactly one failure mode: a dependency cycle among the
/// ids present in the batch. Every other anomaly (unknown dependency
/// ids, unparseable due dates, unrecognized strategy names) degrades
/// gracefully instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The batch's dependency graph contains a directed cycle.
    #[error("Circular dependencies detected among tasks.")]
    CircularDependency,
}

/// Errors raised by the suggestion read path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuggestionError {
    /// No analysis snapshot has been recorded yet.
    #[error("No analysis available. Run an analysis first.")]
    NoAnalysis,
}
