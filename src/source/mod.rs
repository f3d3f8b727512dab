//! Source output models: variate in, physical power out.

/// Solar array physical output model.
pub mod solar;
pub mod types;
/// Wind turbine power-curve model.
pub mod wind;

pub use solar::SolarArray;
pub use types::SourceModel;
pub use wind::WindTurbine;

/// Dispatch enum over the two source variants.
///
/// One `Simulator` is parameterized over this rather than duplicating a
/// wind class and a solar class; both variants honor the same contract:
/// output in `[0, rated_kw]` for every finite variate.
#[derive(Debug, Clone)]
pub enum Source {
    /// Wind turbine with a three-region power curve.
    Wind(WindTurbine),
    /// Solar array with irradiance-fraction scaling and daily envelope.
    Solar(SolarArray),
}

impl SourceModel for Source {
    fn power_kw(&self, timestep: usize, variate: f32) -> f32 {
        match self {
            Self::Wind(w) => w.power_kw(timestep, variate),
            Self::Solar(s) => s.power_kw(timestep, variate),
        }
    }

    fn rated_kw(&self) -> f32 {
        match self {
            Self::Wind(w) => w.rated_kw(),
            Self::Solar(s) => s.rated_kw(),
        }
    }

    fn source_type(&self) -> &'static str {
        match self {
            Self::Wind(w) => w.source_type(),
            Self::Solar(s) => s.source_type(),
        }
    }
}
