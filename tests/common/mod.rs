//! Shared scenario fixtures for integration tests.

use res_sim::config::ScenarioConfig;

/// Small wind scenario: 24 steps, seed 42, 100 kW turbine with
/// cut-in 3 m/s and rated speed 12 m/s, no storm cut-out.
pub fn small_wind_scenario() -> ScenarioConfig {
    let mut cfg = ScenarioConfig::onshore_wind();
    cfg.simulation.steps_per_day = 24;
    cfg.simulation.days = 1;
    cfg.simulation.seed = 42;
    cfg.source.rated_kw = 100.0;
    cfg.wind.cut_in_mps = 3.0;
    cfg.wind.rated_mps = 12.0;
    cfg.wind.cut_out_mps = None;
    cfg.demand.mean_kw = 80.0;
    cfg
}

/// Solar scenario with the daily envelope and a tightly clear-biased
/// irradiance distribution, so the envelope shape dominates the series.
pub fn clear_solar_scenario() -> ScenarioConfig {
    let mut cfg = ScenarioConfig::solar_farm();
    cfg.simulation.steps_per_day = 8;
    cfg.simulation.days = 1;
    cfg.simulation.seed = 42;
    cfg.source.rated_kw = 50.0;
    cfg.solar.alpha = 200.0;
    cfg.solar.beta = 2.0;
    cfg.solar.daily_envelope = true;
    cfg.demand.mean_kw = 30.0;
    cfg
}
