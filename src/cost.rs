//! Per-step cost accounting.

/// Pure per-index cost rule: no state carried between timesteps.
///
/// Cost combines a fixed per-step charge, maintenance proportional to
/// energy produced, a shortfall price when demand exceeds production,
/// and a curtailment price when production exceeds demand. With the
/// fixed and maintenance rates at zero, cost is exactly zero whenever
/// power matches demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    /// Fixed cost charged every step (USD).
    pub fixed_usd_per_step: f32,
    /// Maintenance cost per MWh produced (USD).
    pub maintenance_usd_per_mwh: f32,
    /// Price per kWh of unmet demand (USD).
    pub shortfall_usd_per_kwh: f32,
    /// Price per kWh of excess production (USD).
    pub curtailment_usd_per_kwh: f32,
}

impl CostModel {
    /// Computes the cost for one timestep from that step's power and
    /// demand. Finite and non-negative for finite non-negative inputs.
    pub fn cost_usd(&self, power_kw: f32, demand_kw: f32, dt_hours: f32) -> f32 {
        let produced_mwh = power_kw * dt_hours / 1000.0;
        let shortfall_kwh = (demand_kw - power_kw).max(0.0) * dt_hours;
        let surplus_kwh = (power_kw - demand_kw).max(0.0) * dt_hours;

        let cost = self.fixed_usd_per_step
            + self.maintenance_usd_per_mwh * produced_mwh
            + self.shortfall_usd_per_kwh * shortfall_kwh
            + self.curtailment_usd_per_kwh * surplus_kwh;
        cost.max(0.0)
    }
}

impl Default for CostModel {
    /// Onshore-wind baseline rates ($10/MWh maintenance).
    fn default() -> Self {
        Self {
            fixed_usd_per_step: 0.0,
            maintenance_usd_per_mwh: 10.0,
            shortfall_usd_per_kwh: 0.12,
            curtailment_usd_per_kwh: 0.03,
        }
    }
}
