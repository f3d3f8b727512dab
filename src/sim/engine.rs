//! Simulator construction and indexed query surface.

use crate::config::ScenarioConfig;
use crate::cost::CostModel;
use crate::demand::DemandProfile;
use crate::error::SimError;
use crate::sampler::{SkewedDistribution, SkewedSampler};
use crate::source::{SolarArray, Source, SourceModel, WindTurbine};

use super::types::{SimConfig, TimeSeries};

/// Seed offset for the demand RNG to avoid correlation with the
/// source-variate stream.
const DEMAND_SEED_OFFSET: u64 = 173;

/// A fully constructed renewable source simulation.
///
/// Construction eagerly derives three aligned series over the horizon:
/// power produced (via sampler and source model), power demanded (via
/// the duck-curve profile), and cost incurred (pure per-step rule over
/// the first two). All accessors are O(1) reads afterward; the object
/// is immutable once built. Construction is atomic: any invalid
/// configuration or distribution parameter fails before a `Simulator`
/// exists.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimConfig,
    source_type: &'static str,
    rated_kw: f32,
    capital_usd_per_kw: f32,
    power_kw: TimeSeries,
    demand_kw: TimeSeries,
    cost_usd: TimeSeries,
}

impl Simulator {
    /// Builds a simulator from a validated scenario.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfiguration`] for the first scenario
    /// validation failure (zero horizon, non-positive capacity, inverted
    /// speed thresholds, bad rates) and [`SimError::InvalidParameter`]
    /// if the variate distribution rejects its parameters.
    pub fn from_scenario(scenario: &ScenarioConfig) -> Result<Self, SimError> {
        let mut errors = scenario.validate();
        if !errors.is_empty() {
            return Err(errors.remove(0).into());
        }

        let s = &scenario.simulation;
        let config = SimConfig::new(s.steps_per_day, s.days, s.seed)?;
        let n = config.total_steps();

        let (source, dist) = match scenario.source.kind.as_str() {
            "wind" => {
                let w = &scenario.wind;
                (
                    Source::Wind(WindTurbine::new(
                        scenario.source.rated_kw,
                        w.cut_in_mps,
                        w.rated_mps,
                        w.cut_out_mps,
                    )?),
                    SkewedDistribution::Weibull {
                        shape: w.shape,
                        scale: w.scale_mps,
                    },
                )
            }
            "solar" => {
                let sol = &scenario.solar;
                (
                    Source::Solar(SolarArray::new(
                        scenario.source.rated_kw,
                        config.steps_per_day,
                        sol.daily_envelope,
                    )?),
                    SkewedDistribution::Beta {
                        alpha: sol.alpha,
                        beta: sol.beta,
                    },
                )
            }
            other => {
                return Err(SimError::InvalidConfiguration {
                    field: "source.kind".into(),
                    message: format!("must be \"wind\" or \"solar\", got \"{other}\""),
                });
            }
        };

        // One variate per timestep, drawn in index order from the master
        // seed; the demand profile gets an offset seed so the two streams
        // stay uncorrelated.
        let mut sampler = SkewedSampler::new(config.seed);
        let variates = sampler.sample_sequence(&dist, n)?;

        let power: Vec<f32> = variates
            .iter()
            .enumerate()
            .map(|(t, v)| source.power_kw(t, *v))
            .collect();

        let d = &scenario.demand;
        let mut profile = DemandProfile::new(
            d.mean_kw,
            d.noise_std,
            d.floor_frac,
            config.steps_per_day,
            config.seed.wrapping_add(DEMAND_SEED_OFFSET),
        );
        let demand: Vec<f32> = (0..n).map(|t| profile.demand_kw(t)).collect();

        let c = &scenario.cost;
        let cost_model = CostModel {
            fixed_usd_per_step: c.fixed_usd_per_step,
            maintenance_usd_per_mwh: c.maintenance_usd_per_mwh,
            shortfall_usd_per_kwh: c.shortfall_usd_per_kwh,
            curtailment_usd_per_kwh: c.curtailment_usd_per_kwh,
        };
        let cost: Vec<f32> = power
            .iter()
            .zip(&demand)
            .map(|(p, dem)| cost_model.cost_usd(*p, *dem, config.dt_hours))
            .collect();

        Ok(Self {
            config,
            source_type: source.source_type(),
            rated_kw: source.rated_kw(),
            capital_usd_per_kw: scenario.source.capital_usd_per_kw,
            power_kw: TimeSeries::new(power),
            demand_kw: TimeSeries::new(demand),
            cost_usd: TimeSeries::new(cost),
        })
    }

    /// Power produced at timestep `i` (kW).
    ///
    /// # Errors
    ///
    /// Returns [`SimError::IndexOutOfRange`] when `i` is outside `[0, N)`.
    pub fn power_at(&self, i: usize) -> Result<f32, SimError> {
        self.power_kw.get(i)
    }

    /// Power demanded at timestep `i` (kW). Same index contract as
    /// [`Simulator::power_at`].
    pub fn demand_at(&self, i: usize) -> Result<f32, SimError> {
        self.demand_kw.get(i)
    }

    /// Cost incurred at timestep `i` (USD). Same index contract as
    /// [`Simulator::power_at`].
    pub fn cost_at(&self, i: usize) -> Result<f32, SimError> {
        self.cost_usd.get(i)
    }

    /// Full power series, for bulk export to external renderers.
    pub fn power_output(&self) -> &TimeSeries {
        &self.power_kw
    }

    /// Full demand series.
    pub fn demand_series(&self) -> &TimeSeries {
        &self.demand_kw
    }

    /// Full cost series.
    pub fn cost_series(&self) -> &TimeSeries {
        &self.cost_usd
    }

    /// Timing configuration this simulator was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Human-readable source variant name (`"Wind"` or `"Solar"`).
    pub fn source_type(&self) -> &'static str {
        self.source_type
    }

    /// Rated capacity in kW (the upper clamp on the power series).
    pub fn rated_kw(&self) -> f32 {
        self.rated_kw
    }

    /// Capital cost per rated kW, carried for summary reporting.
    pub fn capital_usd_per_kw(&self) -> f32 {
        self.capital_usd_per_kw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioConfig;

    #[test]
    fn series_lengths_match_horizon() {
        let sim = Simulator::from_scenario(&ScenarioConfig::onshore_wind()).expect("valid");
        let n = sim.config().total_steps();
        assert_eq!(n, 24);
        assert_eq!(sim.power_output().len(), n);
        assert_eq!(sim.demand_series().len(), n);
        assert_eq!(sim.cost_series().len(), n);
    }

    #[test]
    fn power_stays_within_rated_capacity() {
        let sim = Simulator::from_scenario(&ScenarioConfig::onshore_wind()).expect("valid");
        for i in 0..sim.config().total_steps() {
            let p = sim.power_at(i).expect("in range");
            assert!(
                (0.0..=sim.rated_kw()).contains(&p),
                "power {p} out of [0, {}] at i={i}",
                sim.rated_kw()
            );
        }
    }

    #[test]
    fn demand_is_non_negative() {
        let sim = Simulator::from_scenario(&ScenarioConfig::onshore_wind()).expect("valid");
        for i in 0..sim.config().total_steps() {
            assert!(sim.demand_at(i).expect("in range") >= 0.0);
        }
    }

    #[test]
    fn cost_is_finite_and_non_negative() {
        let sim = Simulator::from_scenario(&ScenarioConfig::onshore_wind()).expect("valid");
        for i in 0..sim.config().total_steps() {
            let c = sim.cost_at(i).expect("in range");
            assert!(c.is_finite());
            assert!(c >= 0.0);
        }
    }

    #[test]
    fn accessors_reject_out_of_range_index() {
        let sim = Simulator::from_scenario(&ScenarioConfig::onshore_wind()).expect("valid");
        let n = sim.config().total_steps();
        assert_eq!(
            sim.power_at(n),
            Err(SimError::IndexOutOfRange { index: n, len: n })
        );
        assert!(sim.demand_at(n).is_err());
        assert!(sim.cost_at(usize::MAX).is_err());
    }

    #[test]
    fn identical_scenarios_produce_identical_series() {
        let cfg = ScenarioConfig::onshore_wind();
        let a = Simulator::from_scenario(&cfg).expect("valid");
        let b = Simulator::from_scenario(&cfg).expect("valid");
        assert_eq!(a.power_output(), b.power_output());
        assert_eq!(a.demand_series(), b.demand_series());
        assert_eq!(a.cost_series(), b.cost_series());
    }

    #[test]
    fn different_seeds_produce_different_power() {
        let mut cfg = ScenarioConfig::onshore_wind();
        let a = Simulator::from_scenario(&cfg).expect("valid");
        cfg.simulation.seed = 1234;
        let b = Simulator::from_scenario(&cfg).expect("valid");
        assert_ne!(a.power_output(), b.power_output());
    }

    #[test]
    fn zero_horizon_fails_atomically() {
        let mut cfg = ScenarioConfig::onshore_wind();
        cfg.simulation.steps_per_day = 0;
        let err = Simulator::from_scenario(&cfg);
        assert!(matches!(err, Err(SimError::InvalidConfiguration { .. })));
    }

    #[test]
    fn non_positive_capacity_fails() {
        let mut cfg = ScenarioConfig::onshore_wind();
        cfg.source.rated_kw = -1.0;
        assert!(Simulator::from_scenario(&cfg).is_err());
    }

    #[test]
    fn bad_distribution_params_fail() {
        let mut cfg = ScenarioConfig::onshore_wind();
        cfg.wind.shape = -2.0;
        let err = Simulator::from_scenario(&cfg);
        // Caught by scenario validation before sampling begins.
        assert!(err.is_err());
    }

    #[test]
    fn solar_scenario_builds() {
        let sim = Simulator::from_scenario(&ScenarioConfig::solar_farm()).expect("valid");
        assert_eq!(sim.source_type(), "Solar");
        assert_eq!(sim.power_at(0), Ok(0.0), "envelope is zero at midnight");
    }

    #[test]
    fn multi_day_horizon() {
        let mut cfg = ScenarioConfig::onshore_wind();
        cfg.simulation.days = 3;
        let sim = Simulator::from_scenario(&cfg).expect("valid");
        assert_eq!(sim.config().total_steps(), 72);
        assert_eq!(sim.power_output().len(), 72);
    }
}
