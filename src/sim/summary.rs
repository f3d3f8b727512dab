//! Post-hoc run summary computed from the three series.

use std::fmt;

use super::engine::Simulator;

/// Aggregate figures derived from a completed simulation.
///
/// Computed post-hoc from the simulator's series so the report always
/// agrees with the indexed data.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Source variant name.
    pub source_type: &'static str,
    /// Total energy produced over the horizon (MWh).
    pub total_energy_mwh: f32,
    /// Total operating cost over the horizon (USD).
    pub total_cost_usd: f32,
    /// Up-front capital cost (USD), `capital_usd_per_kw * rated_kw`.
    pub capital_cost_usd: f32,
    /// Highest power value in the series (kW).
    pub peak_power_kw: f32,
    /// Mean power divided by rated capacity.
    pub capacity_factor: f32,
    /// Mean demand over the horizon (kW).
    pub mean_demand_kw: f32,
    /// Number of timesteps where demand exceeded production.
    pub shortfall_steps: usize,
}

impl RunSummary {
    /// Computes all summary figures in one pass over the series.
    pub fn from_simulator(sim: &Simulator) -> Self {
        let power = sim.power_output().values();
        let demand = sim.demand_series().values();
        let cost = sim.cost_series().values();
        let dt = sim.config().dt_hours;

        if power.is_empty() {
            return Self {
                source_type: sim.source_type(),
                total_energy_mwh: 0.0,
                total_cost_usd: 0.0,
                capital_cost_usd: sim.capital_usd_per_kw() * sim.rated_kw(),
                peak_power_kw: 0.0,
                capacity_factor: 0.0,
                mean_demand_kw: 0.0,
                shortfall_steps: 0,
            };
        }

        let n = power.len() as f32;
        let mut energy_kwh = 0.0_f32;
        let mut total_cost = 0.0_f32;
        let mut peak = 0.0_f32;
        let mut demand_sum = 0.0_f32;
        let mut shortfalls = 0_usize;

        for i in 0..power.len() {
            energy_kwh += power[i] * dt;
            total_cost += cost[i];
            peak = peak.max(power[i]);
            demand_sum += demand[i];
            if demand[i] > power[i] {
                shortfalls += 1;
            }
        }

        Self {
            source_type: sim.source_type(),
            total_energy_mwh: energy_kwh / 1000.0,
            total_cost_usd: total_cost,
            capital_cost_usd: sim.capital_usd_per_kw() * sim.rated_kw(),
            peak_power_kw: peak,
            capacity_factor: energy_kwh / (sim.rated_kw() * dt * n),
            mean_demand_kw: demand_sum / n,
            shortfall_steps: shortfalls,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Run Summary ({}) ---", self.source_type)?;
        writeln!(f, "Total energy:      {:.2} MWh", self.total_energy_mwh)?;
        writeln!(f, "Total cost:        ${:.2}", self.total_cost_usd)?;
        writeln!(f, "Capital cost:      ${:.0}", self.capital_cost_usd)?;
        writeln!(f, "Peak power:        {:.2} kW", self.peak_power_kw)?;
        writeln!(f, "Capacity factor:   {:.1}%", self.capacity_factor * 100.0)?;
        writeln!(f, "Mean demand:       {:.2} kW", self.mean_demand_kw)?;
        write!(f, "Shortfall steps:   {}", self.shortfall_steps)
    }
}
