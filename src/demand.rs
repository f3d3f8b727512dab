//! Synthetic demand series generation.
//!
//! Demand is independent of the power series: a normalized duck curve
//! (afternoon peak) scaled to a configured mean, with multiplicative
//! Gaussian noise from an own seeded RNG and a floor preventing
//! near-zero values. Noise policy: symmetric `Normal(1, noise_std)`,
//! one draw per index in construction order, so a fixed seed yields a
//! bit-identical series.

use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

/// Duck-curve load generator.
///
/// The baseline shape is `0.9 + 1.1 * sin(2*pi*day_pos - pi/2)^3`,
/// normalized so its daily mean matches `mean_kw`, then perturbed by
/// multiplicative noise and floored at `floor_frac * mean_kw`.
#[derive(Debug, Clone)]
pub struct DemandProfile {
    /// Target mean demand in kilowatts.
    pub mean_kw: f32,
    /// Fraction of the mean used as a lower floor.
    pub floor_frac: f32,
    /// Number of timesteps per simulated day.
    steps_per_day: usize,
    /// Daily mean of the raw duck shape, used for normalization.
    duck_mean: f32,
    noise: Option<Normal<f32>>,
    rng: StdRng,
}

impl DemandProfile {
    /// Creates a demand profile with its own seeded RNG.
    ///
    /// `noise_std` and `floor_frac` are clamped to valid ranges rather
    /// than rejected here; scenario validation reports violations up
    /// front.
    pub fn new(
        mean_kw: f32,
        noise_std: f32,
        floor_frac: f32,
        steps_per_day: usize,
        seed: u64,
    ) -> Self {
        let steps_per_day = steps_per_day.max(1);
        let noise_std = noise_std.max(0.0);

        let mut duck_sum = 0.0_f32;
        for t in 0..steps_per_day {
            duck_sum += Self::duck_raw(t, steps_per_day);
        }
        let duck_mean = duck_sum / steps_per_day as f32;

        let noise = if noise_std > 0.0 {
            Normal::new(1.0, noise_std).ok()
        } else {
            None
        };

        Self {
            mean_kw: mean_kw.max(0.0),
            floor_frac: floor_frac.clamp(0.0, 1.0),
            steps_per_day,
            duck_mean,
            noise,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Raw duck-curve value before normalization.
    fn duck_raw(timestep: usize, steps_per_day: usize) -> f32 {
        let day_pos = (timestep % steps_per_day) as f32 / steps_per_day as f32;
        let angle = 2.0 * std::f32::consts::PI * day_pos - std::f32::consts::FRAC_PI_2;
        0.9 + 1.1 * angle.sin().powi(3)
    }

    /// Returns the demand in kW at a timestep. Always >= 0.
    ///
    /// Consumes one noise draw per call; call in index order for a
    /// reproducible series.
    pub fn demand_kw(&mut self, timestep: usize) -> f32 {
        let shape = Self::duck_raw(timestep, self.steps_per_day) / self.duck_mean;

        let mult = match &self.noise {
            Some(n) => n.sample(&mut self.rng),
            None => 1.0,
        };

        let floor = self.floor_frac * self.mean_kw;
        (self.mean_kw * shape * mult).max(floor)
    }
}
