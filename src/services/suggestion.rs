//! Top-N suggestion read path over the latest analysis snapshot.

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::domain::error::SuggestionError;
use crate::domain::models::Suggestion;
use crate::domain::ports::AnalysisStore;

/// Read-only service answering "what should I work on next" from the
/// most recent recorded ranking. It never runs the engine itself.
pub struct SuggestionService {
    store: Arc<dyn AnalysisStore>,
}

impl SuggestionService {
    /// Create a service reading from the given store.
    pub fn new(store: Arc<dyn AnalysisStore>) -> Self {
        Self { store }
    }

    /// The top `limit` tasks of the latest snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionError::NoAnalysis`] when no analysis has been
    /// recorded yet. Store failures propagate as-is.
    pub async fn suggest(&self, limit: usize) -> Result<Vec<Suggestion>> {
        let snapshot = self
            .store
            .latest()
            .await?
            .ok_or(SuggestionError::NoAnalysis)?;

        debug!(
            version = snapshot.version,
            limit, "serving suggestions from snapshot"
        );

        Ok(snapshot
            .tasks
            .iter()
            .take(limit)
            .map(Suggestion::from_scored)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryAnalysisStore;
    use crate::domain::error::SuggestionError;
    use crate::domain::models::{ResolvedTask, ScoredTask, Strategy, TaskInput};

    fn scored(id: i64, score: f64) -> ScoredTask {
        let resolved =
            ResolvedTask::from_input(&TaskInput::new(format!("Task {id}")).with_id(id), 0);
        ScoredTask::from_resolved(resolved, score, format!("Urgency: {id}"))
    }

    #[tokio::test]
    async fn test_no_analysis_is_an_error() {
        let service = SuggestionService::new(Arc::new(InMemoryAnalysisStore::new()));
        let err = service.suggest(3).await.unwrap_err();
        assert_eq!(
            err.downcast::<SuggestionError>().unwrap(),
            SuggestionError::NoAnalysis
        );
    }

    #[tokio::test]
    async fn test_returns_top_n_in_order() {
        let store = Arc::new(InMemoryAnalysisStore::new());
        store
            .record(
                Strategy::SmartBalance,
                vec![scored(1, 90.0), scored(2, 50.0), scored(3, 10.0)],
            )
            .await
            .unwrap();

        let service = SuggestionService::new(store);
        let suggestions = service.suggest(2).await.unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].id, 1);
        assert_eq!(suggestions[1].id, 2);
        assert_eq!(suggestions[0].why, "Score components: Urgency: 1");
    }

    #[tokio::test]
    async fn test_limit_larger_than_batch() {
        let store = Arc::new(InMemoryAnalysisStore::new());
        store
            .record(Strategy::SmartBalance, vec![scored(1, 90.0)])
            .await
            .unwrap();

        let service = SuggestionService::new(store);
        let suggestions = service.suggest(10).await.unwrap();
        assert_eq!(suggestions.len(), 1);
    }
}
