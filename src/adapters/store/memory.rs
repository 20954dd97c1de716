//! In-memory single-slot analysis store.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::models::{AnalysisSnapshot, ScoredTask, Strategy};
use crate::domain::ports::AnalysisStore;

/// Process-local [`AnalysisStore`] holding the latest snapshot.
///
/// Writers take the write lock for the whole version-bump-and-replace,
/// so versions are strictly increasing and readers never observe a
/// partially written snapshot.
#[derive(Debug, Default)]
pub struct InMemoryAnalysisStore {
    slot: RwLock<Option<AnalysisSnapshot>>,
}

impl InMemoryAnalysisStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisStore for InMemoryAnalysisStore {
    async fn record(
        &self,
        strategy: Strategy,
        tasks: Vec<ScoredTask>,
    ) -> Result<AnalysisSnapshot> {
        let mut slot = self.slot.write().await;
        let version = slot.as_ref().map_or(1, |prev| prev.version + 1);
        let snapshot = AnalysisSnapshot {
            version,
            strategy,
            analyzed_at: Utc::now(),
            tasks,
        };
        debug!(version, task_count = snapshot.tasks.len(), "recorded analysis snapshot");
        *slot = Some(snapshot.clone());
        Ok(snapshot)
    }

    async fn latest(&self) -> Result<Option<AnalysisSnapshot>> {
        Ok(self.slot.read().await.clone())
    }
}
