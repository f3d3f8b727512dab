use crate::error::SimError;
use crate::source::types::SourceModel;

/// A solar array scaling an irradiance-fraction variate to power.
///
/// Output is `rated_kw * envelope(t) * fraction`, where the fraction is
/// the cloud-attenuation variate clamped to [0, 1]. The daily envelope
/// is a half sine over each day period: zero at index 0 of the day,
/// peak at the midpoint, so a clear-sky fraction of 1 at solar noon
/// yields exactly `rated_kw`. With the envelope disabled the fraction
/// scales the rated capacity directly.
#[derive(Debug, Clone)]
pub struct SolarArray {
    /// Rated capacity in kilowatts.
    rated_kw: f32,
    /// Number of timesteps per simulated day (envelope period).
    steps_per_day: usize,
    /// Whether the daily envelope is applied.
    pub daily_envelope: bool,
}

impl SolarArray {
    /// Creates a solar array model.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfiguration`] when `rated_kw <= 0`
    /// or `steps_per_day == 0`.
    pub fn new(
        rated_kw: f32,
        steps_per_day: usize,
        daily_envelope: bool,
    ) -> Result<Self, SimError> {
        if !(rated_kw > 0.0) || !rated_kw.is_finite() {
            return Err(SimError::InvalidConfiguration {
                field: "source.rated_kw".into(),
                message: format!("must be a positive finite number, got {rated_kw}"),
            });
        }
        if steps_per_day == 0 {
            return Err(SimError::InvalidConfiguration {
                field: "simulation.steps_per_day".into(),
                message: "must be > 0".into(),
            });
        }
        Ok(Self {
            rated_kw,
            steps_per_day,
            daily_envelope,
        })
    }

    /// Daily envelope value for a timestep: `sin(pi * day_pos)`.
    ///
    /// Index 0 of each day maps to 0, the day midpoint to 1.
    fn envelope(&self, timestep: usize) -> f32 {
        if !self.daily_envelope {
            return 1.0;
        }
        let day_pos = (timestep % self.steps_per_day) as f32 / self.steps_per_day as f32;
        (std::f32::consts::PI * day_pos).sin().max(0.0)
    }
}

impl SourceModel for SolarArray {
    /// Scales an irradiance-fraction variate to power.
    ///
    /// Non-finite variates and values outside [0, 1] are clamped.
    fn power_kw(&self, timestep: usize, variate: f32) -> f32 {
        let frac = if variate.is_finite() {
            variate.clamp(0.0, 1.0)
        } else {
            0.0
        };
        (self.rated_kw * self.envelope(timestep) * frac).clamp(0.0, self.rated_kw)
    }

    fn rated_kw(&self) -> f32 {
        self.rated_kw
    }

    fn source_type(&self) -> &'static str {
        "Solar"
    }
}
