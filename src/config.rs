//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SimError;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the onshore-wind scenario. Load
/// from TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::onshore_wind`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Simulation timing and seeding.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Source kind, capacity, and capital cost.
    #[serde(default)]
    pub source: SourceConfig,
    /// Wind-speed distribution and power-curve parameters.
    #[serde(default)]
    pub wind: WindConfig,
    /// Irradiance distribution and envelope parameters.
    #[serde(default)]
    pub solar: SolarConfig,
    /// Demand curve parameters.
    #[serde(default)]
    pub demand: DemandConfig,
    /// Cost rate parameters.
    #[serde(default)]
    pub cost: CostConfig,
}

/// Simulation timing and seeding.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of timesteps per simulated day (must be > 0).
    pub steps_per_day: usize,
    /// Number of days to simulate (must be > 0).
    pub days: usize,
    /// Master random seed.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps_per_day: 24,
            days: 1,
            seed: 42,
        }
    }
}

/// Source kind, rated capacity, and capital cost.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Source kind: `"wind"` or `"solar"`.
    pub kind: String,
    /// Rated capacity (kW, must be > 0). Upper clamp on the power series.
    pub rated_kw: f32,
    /// Capital cost per rated kW (USD), reported in the run summary.
    pub capital_usd_per_kw: f32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        // One 2.3 MW onshore turbine at roughly $1M installed.
        Self {
            kind: "wind".to_string(),
            rated_kw: 2300.0,
            capital_usd_per_kw: 435.0,
        }
    }
}

/// Wind-speed distribution and power-curve parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindConfig {
    /// Weibull shape parameter k (must be > 0).
    pub shape: f32,
    /// Weibull scale parameter in m/s (must be > 0).
    pub scale_mps: f32,
    /// Cut-in wind speed (m/s, >= 0).
    pub cut_in_mps: f32,
    /// Rated wind speed (m/s, must be > cut_in_mps).
    pub rated_mps: f32,
    /// Storm cut-out wind speed (m/s, must be > rated_mps when set).
    pub cut_out_mps: Option<f32>,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            shape: 2.0,
            scale_mps: 9.0,
            cut_in_mps: 3.5,
            rated_mps: 13.0,
            cut_out_mps: Some(25.0),
        }
    }
}

/// Irradiance-fraction distribution and daily envelope parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolarConfig {
    /// Beta distribution alpha (must be > 0). Larger alpha biases clear.
    pub alpha: f32,
    /// Beta distribution beta (must be > 0).
    pub beta: f32,
    /// Whether to apply the sunrise-to-sunset daily envelope.
    pub daily_envelope: bool,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            alpha: 4.0,
            beta: 2.0,
            daily_envelope: true,
        }
    }
}

/// Demand curve parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemandConfig {
    /// Target mean demand (kW, must be > 0).
    pub mean_kw: f32,
    /// Multiplicative noise standard deviation (>= 0).
    pub noise_std: f32,
    /// Demand floor as a fraction of the mean (in [0, 1]).
    pub floor_frac: f32,
}

impl Default for DemandConfig {
    fn default() -> Self {
        Self {
            mean_kw: 1800.0,
            noise_std: 0.05,
            floor_frac: 0.1,
        }
    }
}

/// Cost rate parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CostConfig {
    /// Fixed cost per step (USD, >= 0).
    pub fixed_usd_per_step: f32,
    /// Maintenance cost per MWh produced (USD, >= 0).
    pub maintenance_usd_per_mwh: f32,
    /// Price per kWh of unmet demand (USD, >= 0).
    pub shortfall_usd_per_kwh: f32,
    /// Price per kWh of excess production (USD, >= 0).
    pub curtailment_usd_per_kwh: f32,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            fixed_usd_per_step: 0.0,
            maintenance_usd_per_mwh: 10.0,
            shortfall_usd_per_kwh: 0.12,
            curtailment_usd_per_kwh: 0.03,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"simulation.steps_per_day"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        SimError::InvalidConfiguration {
            field: e.field,
            message: e.message,
        }
    }
}

impl ScenarioConfig {
    /// Returns the onshore-wind scenario (the built-in default).
    pub fn onshore_wind() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            source: SourceConfig::default(),
            wind: WindConfig::default(),
            solar: SolarConfig::default(),
            demand: DemandConfig::default(),
            cost: CostConfig::default(),
        }
    }

    /// Returns the offshore-wind preset: bigger turbine, windier site,
    /// pricier capital and maintenance.
    pub fn offshore_wind() -> Self {
        Self {
            source: SourceConfig {
                kind: "wind".to_string(),
                rated_kw: 8000.0,
                capital_usd_per_kw: 520.0,
            },
            wind: WindConfig {
                scale_mps: 11.0,
                ..WindConfig::default()
            },
            demand: DemandConfig {
                mean_kw: 5500.0,
                ..DemandConfig::default()
            },
            cost: CostConfig {
                maintenance_usd_per_mwh: 15.0,
                ..CostConfig::default()
            },
            ..Self::onshore_wind()
        }
    }

    /// Returns the solar-farm preset: utility-scale PV with the daily
    /// envelope and cheaper maintenance.
    pub fn solar_farm() -> Self {
        Self {
            source: SourceConfig {
                kind: "solar".to_string(),
                rated_kw: 50_000.0,
                capital_usd_per_kw: 750.0,
            },
            demand: DemandConfig {
                mean_kw: 20_000.0,
                ..DemandConfig::default()
            },
            cost: CostConfig {
                maintenance_usd_per_mwh: 5.0,
                ..CostConfig::default()
            },
            ..Self::onshore_wind()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["onshore_wind", "offshore_wind", "solar_farm"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "onshore_wind" => Ok(Self::onshore_wind()),
            "offshore_wind" => Ok(Self::offshore_wind()),
            "solar_farm" => Ok(Self::solar_farm()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let s = &self.simulation;

        if s.steps_per_day == 0 {
            errors.push(ConfigError {
                field: "simulation.steps_per_day".into(),
                message: "must be > 0".into(),
            });
        }
        if s.days == 0 {
            errors.push(ConfigError {
                field: "simulation.days".into(),
                message: "must be > 0".into(),
            });
        }

        let src = &self.source;
        if src.kind != "wind" && src.kind != "solar" {
            errors.push(ConfigError {
                field: "source.kind".into(),
                message: format!("must be \"wind\" or \"solar\", got \"{}\"", src.kind),
            });
        }
        if !(src.rated_kw > 0.0) || !src.rated_kw.is_finite() {
            errors.push(ConfigError {
                field: "source.rated_kw".into(),
                message: "must be a positive finite number".into(),
            });
        }
        if !(src.capital_usd_per_kw >= 0.0) || !src.capital_usd_per_kw.is_finite() {
            errors.push(ConfigError {
                field: "source.capital_usd_per_kw".into(),
                message: "must be >= 0 and finite".into(),
            });
        }

        let w = &self.wind;
        if !(w.shape > 0.0) || !w.shape.is_finite() {
            errors.push(ConfigError {
                field: "wind.shape".into(),
                message: "must be a positive finite number".into(),
            });
        }
        if !(w.scale_mps > 0.0) || !w.scale_mps.is_finite() {
            errors.push(ConfigError {
                field: "wind.scale_mps".into(),
                message: "must be a positive finite number".into(),
            });
        }
        if !(w.cut_in_mps >= 0.0) {
            errors.push(ConfigError {
                field: "wind.cut_in_mps".into(),
                message: "must be >= 0".into(),
            });
        }
        if !(w.rated_mps > w.cut_in_mps) {
            errors.push(ConfigError {
                field: "wind.rated_mps".into(),
                message: "must be > wind.cut_in_mps".into(),
            });
        }
        if let Some(co) = w.cut_out_mps {
            if !(co > w.rated_mps) {
                errors.push(ConfigError {
                    field: "wind.cut_out_mps".into(),
                    message: "must be > wind.rated_mps".into(),
                });
            }
        }

        let sol = &self.solar;
        if !(sol.alpha > 0.0) || !sol.alpha.is_finite() {
            errors.push(ConfigError {
                field: "solar.alpha".into(),
                message: "must be a positive finite number".into(),
            });
        }
        if !(sol.beta > 0.0) || !sol.beta.is_finite() {
            errors.push(ConfigError {
                field: "solar.beta".into(),
                message: "must be a positive finite number".into(),
            });
        }

        let d = &self.demand;
        if !(d.mean_kw > 0.0) || !d.mean_kw.is_finite() {
            errors.push(ConfigError {
                field: "demand.mean_kw".into(),
                message: "must be a positive finite number".into(),
            });
        }
        if !(d.noise_std >= 0.0) || !d.noise_std.is_finite() {
            errors.push(ConfigError {
                field: "demand.noise_std".into(),
                message: "must be >= 0 and finite".into(),
            });
        }
        if !(0.0..=1.0).contains(&d.floor_frac) {
            errors.push(ConfigError {
                field: "demand.floor_frac".into(),
                message: "must be in [0.0, 1.0]".into(),
            });
        }

        let c = &self.cost;
        for (field, value) in [
            ("cost.fixed_usd_per_step", c.fixed_usd_per_step),
            ("cost.maintenance_usd_per_mwh", c.maintenance_usd_per_mwh),
            ("cost.shortfall_usd_per_kwh", c.shortfall_usd_per_kwh),
            ("cost.curtailment_usd_per_kwh", c.curtailment_usd_per_kwh),
        ] {
            if !(value >= 0.0) || !value.is_finite() {
                errors.push(ConfigError {
                    field: field.into(),
                    message: "must be >= 0 and finite".into(),
                });
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onshore_wind_preset_valid() {
        let cfg = ScenarioConfig::onshore_wind();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "onshore_wind should be valid: {errors:?}");
    }

    #[test]
    fn all_presets_are_valid() {
        for name in ScenarioConfig::PRESETS {
            let cfg = ScenarioConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn from_preset_unknown() {
        let err = ScenarioConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[simulation]
steps_per_day = 48
days = 2
seed = 99

[source]
kind = "solar"
rated_kw = 5000.0
capital_usd_per_kw = 700.0

[wind]
shape = 2.2
scale_mps = 10.0
cut_in_mps = 3.0
rated_mps = 12.0
cut_out_mps = 24.0

[solar]
alpha = 5.0
beta = 1.5
daily_envelope = true

[demand]
mean_kw = 3000.0
noise_std = 0.04
floor_frac = 0.15

[cost]
fixed_usd_per_step = 1.0
maintenance_usd_per_mwh = 5.0
shortfall_usd_per_kwh = 0.2
curtailment_usd_per_kwh = 0.05
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.simulation.steps_per_day), Some(48));
        assert_eq!(cfg.as_ref().map(|c| c.simulation.days), Some(2));
        assert_eq!(cfg.as_ref().map(|c| &*c.source.kind), Some("solar"));
        assert_eq!(cfg.as_ref().map(|c| c.wind.cut_out_mps), Some(Some(24.0)));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[simulation]
steps_per_day = 24
bogus_field = true
"#;
        let result = ScenarioConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[simulation]
seed = 99
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.simulation.seed), Some(99));
        assert_eq!(cfg.as_ref().map(|c| c.simulation.steps_per_day), Some(24));
        assert_eq!(cfg.as_ref().map(|c| c.source.rated_kw), Some(2300.0));
    }

    #[test]
    fn validation_catches_zero_steps() {
        let mut cfg = ScenarioConfig::onshore_wind();
        cfg.simulation.steps_per_day = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "simulation.steps_per_day"));
    }

    #[test]
    fn validation_catches_zero_days() {
        let mut cfg = ScenarioConfig::onshore_wind();
        cfg.simulation.days = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "simulation.days"));
    }

    #[test]
    fn validation_catches_bad_kind() {
        let mut cfg = ScenarioConfig::onshore_wind();
        cfg.source.kind = "gas".to_string();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "source.kind"));
    }

    #[test]
    fn validation_catches_non_positive_capacity() {
        let mut cfg = ScenarioConfig::onshore_wind();
        cfg.source.rated_kw = 0.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "source.rated_kw"));

        cfg.source.rated_kw = -100.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "source.rated_kw"));
    }

    #[test]
    fn validation_catches_bad_weibull_params() {
        let mut cfg = ScenarioConfig::onshore_wind();
        cfg.wind.shape = 0.0;
        cfg.wind.scale_mps = -2.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "wind.shape"));
        assert!(errors.iter().any(|e| e.field == "wind.scale_mps"));
    }

    #[test]
    fn validation_catches_inverted_speed_thresholds() {
        let mut cfg = ScenarioConfig::onshore_wind();
        cfg.wind.cut_in_mps = 15.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "wind.rated_mps"));
    }

    #[test]
    fn validation_catches_low_cut_out() {
        let mut cfg = ScenarioConfig::onshore_wind();
        cfg.wind.cut_out_mps = Some(5.0);
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "wind.cut_out_mps"));
    }

    #[test]
    fn validation_accepts_disabled_cut_out() {
        let mut cfg = ScenarioConfig::onshore_wind();
        cfg.wind.cut_out_mps = None;
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn validation_catches_bad_beta_params() {
        let mut cfg = ScenarioConfig::solar_farm();
        cfg.solar.alpha = -1.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "solar.alpha"));
    }

    #[test]
    fn validation_catches_bad_demand() {
        let mut cfg = ScenarioConfig::onshore_wind();
        cfg.demand.mean_kw = 0.0;
        cfg.demand.floor_frac = 1.5;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "demand.mean_kw"));
        assert!(errors.iter().any(|e| e.field == "demand.floor_frac"));
    }

    #[test]
    fn validation_catches_negative_rates() {
        let mut cfg = ScenarioConfig::onshore_wind();
        cfg.cost.shortfall_usd_per_kwh = -0.1;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "cost.shortfall_usd_per_kwh"));
    }

    #[test]
    fn offshore_has_larger_turbine() {
        let on = ScenarioConfig::onshore_wind();
        let off = ScenarioConfig::offshore_wind();
        assert!(off.source.rated_kw > on.source.rated_kw);
        assert!(off.wind.scale_mps > on.wind.scale_mps);
    }

    #[test]
    fn solar_farm_is_solar() {
        let cfg = ScenarioConfig::solar_farm();
        assert_eq!(cfg.source.kind, "solar");
        assert!(cfg.solar.daily_envelope);
    }

    #[test]
    fn config_error_converts_to_sim_error() {
        let e = ConfigError {
            field: "source.rated_kw".into(),
            message: "must be a positive finite number".into(),
        };
        let sim: SimError = e.into();
        assert!(matches!(sim, SimError::InvalidConfiguration { .. }));
    }
}
