use crate::error::SimError;
use crate::source::types::SourceModel;

/// A wind turbine (or farm) with a three-region power curve.
///
/// Output is zero below the cut-in speed, follows a cubic curve between
/// cut-in and rated speed, and holds at `rated_kw` from rated speed up.
/// An optional cut-out speed models storm shutdown: at or above it the
/// turbine feathers and output drops back to zero.
///
/// ```text
///          0                          v <  cut_in
/// P(v) =   rated_kw * (v / rated)^3   cut_in <= v < rated
///          rated_kw                   rated  <= v < cut_out
///          0                          v >= cut_out (when configured)
/// ```
#[derive(Debug, Clone)]
pub struct WindTurbine {
    /// Rated capacity in kilowatts.
    rated_kw: f32,
    /// Cut-in wind speed in m/s (inclusive lower bound of generation).
    pub cut_in_mps: f32,
    /// Rated wind speed in m/s (output saturates here).
    pub rated_mps: f32,
    /// Optional cut-out wind speed in m/s (storm shutdown).
    pub cut_out_mps: Option<f32>,
}

impl WindTurbine {
    /// Creates a wind turbine model.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfiguration`] when `rated_kw <= 0`,
    /// when the speed thresholds are not strictly increasing, or when
    /// `cut_in_mps` is negative.
    pub fn new(
        rated_kw: f32,
        cut_in_mps: f32,
        rated_mps: f32,
        cut_out_mps: Option<f32>,
    ) -> Result<Self, SimError> {
        if !(rated_kw > 0.0) || !rated_kw.is_finite() {
            return Err(SimError::InvalidConfiguration {
                field: "source.rated_kw".into(),
                message: format!("must be a positive finite number, got {rated_kw}"),
            });
        }
        if !(cut_in_mps >= 0.0) {
            return Err(SimError::InvalidConfiguration {
                field: "wind.cut_in_mps".into(),
                message: format!("must be >= 0, got {cut_in_mps}"),
            });
        }
        if !(rated_mps > cut_in_mps) {
            return Err(SimError::InvalidConfiguration {
                field: "wind.rated_mps".into(),
                message: format!("must be > wind.cut_in_mps ({cut_in_mps}), got {rated_mps}"),
            });
        }
        if let Some(co) = cut_out_mps {
            if !(co > rated_mps) {
                return Err(SimError::InvalidConfiguration {
                    field: "wind.cut_out_mps".into(),
                    message: format!("must be > wind.rated_mps ({rated_mps}), got {co}"),
                });
            }
        }
        Ok(Self {
            rated_kw,
            cut_in_mps,
            rated_mps,
            cut_out_mps,
        })
    }
}

impl SourceModel for WindTurbine {
    /// Evaluates the power curve for a wind-speed variate in m/s.
    ///
    /// Negative or non-finite variates are treated as calm (zero output).
    fn power_kw(&self, _timestep: usize, variate: f32) -> f32 {
        let v = if variate.is_finite() {
            variate.max(0.0)
        } else {
            0.0
        };

        if let Some(cut_out) = self.cut_out_mps {
            if v >= cut_out {
                return 0.0;
            }
        }

        if v < self.cut_in_mps {
            0.0
        } else if v >= self.rated_mps {
            self.rated_kw
        } else {
            let frac = v / self.rated_mps;
            (self.rated_kw * frac * frac * frac).clamp(0.0, self.rated_kw)
        }
    }

    fn rated_kw(&self) -> f32 {
        self.rated_kw
    }

    fn source_type(&self) -> &'static str {
        "Wind"
    }
}
