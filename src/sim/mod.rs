//! Simulator orchestration, timing types, and run summary.

/// Eager series construction and indexed accessors.
pub mod engine;
/// Aggregate reporting over a completed run.
pub mod summary;
pub mod types;

pub use engine::Simulator;
pub use summary::RunSummary;
pub use types::{SimConfig, TimeSeries};
