//! Task domain models.
//!
//! Tasks are transient records that exist for a single analysis call.
//! They carry the raw prioritization signals (due date, importance,
//! effort, dependencies) and are never persisted.

use serde::{Deserialize, Serialize};

/// A task as submitted by the caller, before id resolution.
///
/// Missing fields are defaulted the same way the validation layer would
/// default them: `estimated_hours` to 1.0, `importance` to 5,
/// `dependencies` to empty. The `id` may be absent, in which case the
/// graph builder assigns the task's 1-based position in the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInput {
    /// Caller-assigned id, unique within the batch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Short human-readable title.
    pub title: String,

    /// Due date as an ISO `YYYY-MM-DD` string. Unparseable or absent
    /// values are treated as "no due date" during analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Estimated effort in hours. Must be non-negative.
    #[serde(default = "default_estimated_hours")]
    pub estimated_hours: f64,

    /// Stated importance on a 1-10 scale.
    #[serde(default = "default_importance")]
    pub importance: i64,

    /// Ids of tasks this task depends on. Ids not present in the batch
    /// are ignored when building the dependency graph.
    #[serde(default)]
    pub dependencies: Vec<i64>,
}

const fn default_estimated_hours() -> f64 {
    1.0
}

const fn default_importance() -> i64 {
    5
}

impl TaskInput {
    /// Create a task with default signals and no explicit id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            due_date: None,
            estimated_hours: default_estimated_hours(),
            importance: default_importance(),
            dependencies: Vec::new(),
        }
    }

    /// Set the explicit id.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the due date string.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Set the estimated effort in hours.
    #[must_use]
    pub fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = hours;
        self
    }

    /// Set the importance rating.
    #[must_use]
    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = importance;
        self
    }

    /// Set the dependency id list.
    #[must_use]
    pub fn with_dependencies(mut self, dependencies: Vec<i64>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

/// A task after id resolution: identical to [`TaskInput`] except the id
/// is concrete. Produced by the graph builder as a new record, leaving
/// the caller's input untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTask {
    /// Concrete id: the explicit id if present, otherwise the task's
    /// 1-based position in the input batch.
    pub id: i64,
    /// Short human-readable title.
    pub title: String,
    /// Due date string, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Estimated effort in hours.
    pub estimated_hours: f64,
    /// Stated importance on a 1-10 scale.
    pub importance: i64,
    /// Dependency ids as submitted (not yet restricted to the batch).
    pub dependencies: Vec<i64>,
}

impl ResolvedTask {
    /// Build from an input record and its 0-based batch position.
    pub fn from_input(task: &TaskInput, position: usize) -> Self {
        Self {
            id: task.id.unwrap_or_else(|| position as i64 + 1),
            title: task.title.clone(),
            due_date: task.due_date.clone(),
            estimated_hours: task.estimated_hours,
            importance: task.importance,
            dependencies: task.dependencies.clone(),
        }
    }
}

/// An analyzed task: the input record enriched with the composite score
/// and a human-readable explanation of the contributing factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    /// Concrete task id.
    pub id: i64,
    /// Short human-readable title.
    pub title: String,
    /// Due date string, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Estimated effort in hours.
    pub estimated_hours: f64,
    /// Stated importance on a 1-10 scale.
    pub importance: i64,
    /// Dependency ids as submitted.
    pub dependencies: Vec<i64>,
    /// Weighted composite score on a roughly 0-100 scale, rounded to
    /// two decimal places.
    pub score: f64,
    /// Per-task breakdown of the four normalized metrics.
    pub explanation: String,
}

impl ScoredTask {
    /// Enrich a resolved task with its score and explanation.
    pub fn from_resolved(task: ResolvedTask, score: f64, explanation: String) -> Self {
        Self {
            id: task.id,
            title: task.title,
            due_date: task.due_date,
            estimated_hours: task.estimated_hours,
            importance: task.importance,
            dependencies: task.dependencies,
            score,
            explanation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_defaults() {
        let task = TaskInput::new("Write report");
        assert_eq!(task.id, None);
        assert_eq!(task.estimated_hours, 1.0);
        assert_eq!(task.importance, 5);
        assert!(task.dependencies.is_empty());
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let task: TaskInput = serde_json::from_str(r#"{"title": "Minimal"}"#).unwrap();
        assert_eq!(task.title, "Minimal");
        assert_eq!(task.estimated_hours, 1.0);
        assert_eq!(task.importance, 5);
        assert!(task.dependencies.is_empty());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_resolve_assigns_positional_id() {
        let task = TaskInput::new("No id");
        let resolved = ResolvedTask::from_input(&task, 2);
        assert_eq!(resolved.id, 3);
    }

    #[test]
    fn test_resolve_keeps_explicit_id() {
        let task = TaskInput::new("Explicit").with_id(42);
        let resolved = ResolvedTask::from_input(&task, 0);
        assert_eq!(resolved.id, 42);
    }

    #[test]
    fn test_scored_serializes_without_null_due_date() {
        let task = ResolvedTask::from_input(&TaskInput::new("T"), 0);
        let scored = ScoredTask::from_resolved(task, 36.5, "Urgency: 0".to_string());
        let json = serde_json::to_string(&scored).unwrap();
        assert!(!json.contains("due_date"));
        assert!(json.contains("\"score\":36.5"));
    }
}
