//! Core simulation types: timing configuration and indexed series.

use crate::error::SimError;

/// Centralized simulation timing configuration.
///
/// The horizon is `steps_per_day * days` timesteps; `dt_hours` is
/// derived as `24.0 / steps_per_day` so energy terms need no duplicated
/// conversions.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Number of simulation steps per day.
    pub steps_per_day: usize,
    /// Number of days to simulate.
    pub days: usize,
    /// Duration of one timestep in hours, derived as `24.0 / steps_per_day`.
    pub dt_hours: f32,
    /// Master random seed for reproducibility.
    pub seed: u64,
}

impl SimConfig {
    /// Creates a simulation configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfiguration`] when `steps_per_day`
    /// or `days` is zero (a zero-length horizon has no valid series).
    pub fn new(steps_per_day: usize, days: usize, seed: u64) -> Result<Self, SimError> {
        if steps_per_day == 0 {
            return Err(SimError::InvalidConfiguration {
                field: "simulation.steps_per_day".into(),
                message: "must be > 0".into(),
            });
        }
        if days == 0 {
            return Err(SimError::InvalidConfiguration {
                field: "simulation.days".into(),
                message: "must be > 0".into(),
            });
        }
        Ok(Self {
            steps_per_day,
            days,
            dt_hours: 24.0 / steps_per_day as f32,
            seed,
        })
    }

    /// Total number of simulation steps across all days (the horizon N).
    pub fn total_steps(&self) -> usize {
        self.steps_per_day * self.days
    }
}

/// An ordered, fixed-length sequence of values indexed `0..N-1`.
///
/// Insertion order is time order: index `i` in each of a simulator's
/// series refers to the same timestep. Read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    values: Vec<f32>,
}

impl TimeSeries {
    /// Wraps a fully computed series.
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// Series length (the horizon N).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::IndexOutOfRange`] when `index >= len`.
    /// Negative indices are unrepresentable: the index type is `usize`.
    pub fn get(&self, index: usize) -> Result<f32, SimError> {
        self.values
            .get(index)
            .copied()
            .ok_or(SimError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    /// Full series as a slice, for bulk export.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Iterates the values in time order.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.values.iter().copied()
    }
}
