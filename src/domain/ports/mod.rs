//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that adapters must
//! implement:
//! - `AnalysisStore`: snapshot slot for the suggestion read path
//!
//! These traits define the contracts that allow the domain to be
//! independent of specific infrastructure implementations.

pub mod analysis_store;

pub use analysis_store::AnalysisStore;
