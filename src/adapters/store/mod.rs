//! Analysis store adapters.

pub mod memory;

pub use memory::InMemoryAnalysisStore;
