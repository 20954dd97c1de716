//! Port for the last-analysis snapshot store.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{AnalysisSnapshot, ScoredTask, Strategy};

/// Port for storing and reading the most recent analysis snapshot.
///
/// The store holds a single logical slot: each successful analysis
/// overwrites the previous one. Implementations must version snapshots
/// monotonically and serialize writers, so a reader always observes one
/// complete snapshot, never a partial overwrite.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Record a completed ranking, assigning it the next version.
    ///
    /// Returns the stored snapshot, version included.
    async fn record(&self, strategy: Strategy, tasks: Vec<ScoredTask>)
        -> Result<AnalysisSnapshot>;

    /// The most recently recorded snapshot, if any analysis has run.
    async fn latest(&self) -> Result<Option<AnalysisSnapshot>>;
}
