//! Service layer: the scoring engine and its surrounding use cases.

pub mod analyzer;
pub mod graph;
pub mod metrics;
pub mod suggestion;
pub mod validation;

pub use analyzer::TaskAnalyzer;
pub use graph::TaskGraph;
pub use suggestion::SuggestionService;
pub use validation::{validate_batch, ValidationError};
