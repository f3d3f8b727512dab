//! CSV export of the aligned power/demand/cost series.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::Simulator;

/// Schema v1 column header for CSV series export.
const HEADER: &str = "timestep,time_hr,power_kw,demand_kw,cost_usd";

/// Exports a simulator's series to a CSV file at the given path.
///
/// Writes a header row followed by one data row per timestep. Produces
/// deterministic output for identical simulators.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(sim: &Simulator, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(sim, buf)
}

/// Writes a simulator's series as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(sim: &Simulator, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    let power = sim.power_output().values();
    let demand = sim.demand_series().values();
    let cost = sim.cost_series().values();
    let dt = sim.config().dt_hours;

    for t in 0..power.len() {
        wtr.write_record(&[
            t.to_string(),
            format!("{:.2}", t as f32 * dt),
            format!("{:.4}", power[t]),
            format!("{:.4}", demand[t]),
            format!("{:.4}", cost[t]),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
