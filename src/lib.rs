//! Triage - Dependency-Aware Task Prioritization
//!
//! Triage ranks a batch of task records linked by "depends on"
//! relationships. It normalizes deadline pressure, stated importance,
//! effort, and blocking impact onto a common scale, combines them under
//! a selectable weighting profile, rejects cyclic dependency
//! configurations, and returns the batch re-ordered by descending
//! priority with a per-task explanation.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Pure business logic and domain models
//! - **Service Layer** (`services`): The scoring engine and use cases
//! - **Adapters Layer** (`adapters`): Port implementations
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```
//! use triage::domain::models::{Strategy, TaskInput};
//! use triage::services::TaskAnalyzer;
//!
//! let batch = vec![
//!     TaskInput::new("Design review").with_id(1),
//!     TaskInput::new("Ship feature").with_id(2).with_dependencies(vec![1]),
//! ];
//! let ranked = TaskAnalyzer::new()
//!     .analyze(&batch, Strategy::SmartBalance)
//!     .expect("acyclic batch");
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked[0].id, 1);
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::store::InMemoryAnalysisStore;
pub use domain::error::{AnalysisError, SuggestionError};
pub use domain::models::{
    AnalysisSnapshot, Config, ScoredTask, Strategy, Suggestion, TaskInput, Weights,
};
pub use domain::ports::AnalysisStore;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{SuggestionService, TaskAnalyzer, ValidationError};
