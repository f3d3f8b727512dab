//! Series export for external consumers.

/// CSV export of simulation series.
pub mod export;
