//! Simulation error taxonomy.

use std::fmt;

/// Errors raised by configuration validation, sampling, and series access.
///
/// All variants are raised synchronously at the point of violation:
/// construction-time checks mean a built [`Simulator`](crate::sim::Simulator)
/// never holds invalid series, and accessor-time checks prevent silent
/// out-of-bounds reads.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A scenario field violates its constraint (bad horizon, capacity,
    /// speed thresholds, rates).
    InvalidConfiguration {
        /// Dotted field path (e.g., `"simulation.steps_per_day"`).
        field: String,
        /// Human-readable constraint description.
        message: String,
    },
    /// A distribution parameter is outside its valid domain.
    InvalidParameter {
        /// Distribution or parameter name (e.g., `"weibull"`).
        name: &'static str,
        /// Human-readable constraint description.
        message: String,
    },
    /// A series accessor index is outside `[0, len)`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Series length.
        len: usize,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { field, message } => {
                write!(f, "invalid configuration: {field} — {message}")
            }
            Self::InvalidParameter { name, message } => {
                write!(f, "invalid parameter: {name} — {message}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for series of length {len}")
            }
        }
    }
}

impl std::error::Error for SimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_configuration() {
        let e = SimError::InvalidConfiguration {
            field: "simulation.steps_per_day".into(),
            message: "must be > 0".into(),
        };
        let s = format!("{e}");
        assert!(s.contains("simulation.steps_per_day"));
        assert!(s.contains("must be > 0"));
    }

    #[test]
    fn display_index_out_of_range() {
        let e = SimError::IndexOutOfRange { index: 24, len: 24 };
        assert_eq!(
            format!("{e}"),
            "index 24 out of range for series of length 24"
        );
    }
}
