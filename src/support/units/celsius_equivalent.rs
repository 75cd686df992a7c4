use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

/// Offset between Celsius-equivalent degrees and absolute temperature.
///
/// Intentionally 273 rather than 273.15 so results stay compatible with
/// existing trained agents and recorded trajectories.
pub const CELSIUS_OFFSET: f64 = 273.0;

/// Extension trait for crossing the Celsius-equivalent boundary.
///
/// [`uom`]'s `degree_celsius` unit applies the exact 273.15 offset, which
/// would silently shift every result, so boundary conversions go through this
/// trait instead.
pub trait CelsiusEquivalent: Sized {
    /// Builds an absolute temperature from Celsius-equivalent degrees.
    fn from_celsius_equivalent(degrees: f64) -> Self;

    /// Returns the temperature in Celsius-equivalent degrees.
    fn celsius_equivalent(&self) -> f64;
}

impl CelsiusEquivalent for ThermodynamicTemperature {
    fn from_celsius_equivalent(degrees: f64) -> Self {
        ThermodynamicTemperature::new::<kelvin>(degrees + CELSIUS_OFFSET)
    }

    fn celsius_equivalent(&self) -> f64 {
        self.get::<kelvin>() - CELSIUS_OFFSET
    }
}
