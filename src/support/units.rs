//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for physical quantities (power, area, time, ...).
//! This module provides the pieces body modeling needs that [`uom`] lacks.
//!
//! ## Temperature differences
//!
//! [`TemperatureDifference::minus`] subtracts one absolute temperature from
//! another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use thermoreg_models::support::units::TemperatureDifference;
//!
//! let body = ThermodynamicTemperature::new::<kelvin>(311.0);
//! let air = ThermodynamicTemperature::new::<kelvin>(308.0);
//! let delta_t = air.minus(body);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! ## Celsius-equivalent temperatures
//!
//! Body and environment temperatures cross the public API as
//! Celsius-equivalent degrees that map to absolute temperature with an offset
//! of exactly 273 (not 273.15). [`CelsiusEquivalent`] owns that mapping so it
//! happens in one place.

mod celsius_equivalent;
mod quantities;
mod temperature_difference;

pub use celsius_equivalent::{CELSIUS_OFFSET, CelsiusEquivalent};
pub use quantities::{
    MassSpecificPower, STEFAN_BOLTZMANN, StefanBoltzmannCoefficient, TemperatureFourthPower,
    fourth_power,
};
pub use temperature_difference::TemperatureDifference;
