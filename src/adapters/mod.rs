//! Adapter implementations of the domain ports.

pub mod store;
