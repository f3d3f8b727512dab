//! Common contract for source output models.

/// Trait defining a power source that converts a sampled environmental
/// variate into a physical power output.
///
/// Implementations are pure: the engine draws one variate per timestep
/// through the sampler and feeds it in, so models carry no RNG state.
pub trait SourceModel {
    /// Returns the power output in kW for the given timestep and variate.
    ///
    /// The variate meaning is model-specific (wind speed in m/s,
    /// irradiance fraction in [0, 1]). Out-of-domain variates are
    /// clamped, never propagated: the result is always within
    /// `[0, rated_kw]` for any finite input.
    fn power_kw(&self, timestep: usize, variate: f32) -> f32;

    /// Rated capacity in kW, the upper clamp on output.
    fn rated_kw(&self) -> f32;

    /// Returns a human-readable type name for the source.
    fn source_type(&self) -> &'static str;
}
