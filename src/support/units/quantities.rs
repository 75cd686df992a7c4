use std::marker::PhantomData;

use uom::{
    si::{
        ISQ, Quantity, SI, f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin,
    },
    typenum::{N3, N4, P1, P2, P4, Z0},
};

/// Radiative exchange coefficient, W/m²·K⁴ in SI.
///
/// Has the dimensions of the Stefan–Boltzmann constant.
pub type StefanBoltzmannCoefficient = Quantity<ISQ<Z0, P1, N3, Z0, N4, Z0, Z0>, SI<f64>, f64>;

/// Fourth power of an absolute temperature, K⁴ in SI.
///
/// Multiplied by a [`StefanBoltzmannCoefficient`] and an area it yields power.
pub type TemperatureFourthPower = Quantity<ISQ<Z0, Z0, Z0, Z0, P4, Z0, Z0>, SI<f64>, f64>;

/// Power per unit body mass, W/kg in SI.
pub type MassSpecificPower = Quantity<ISQ<P2, Z0, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Stefan–Boltzmann constant, rounded to 5.67e-8 W/m²·K⁴.
///
/// No [`uom`] unit carries these dimensions, so the value is stored directly
/// in SI base units.
pub const STEFAN_BOLTZMANN: StefanBoltzmannCoefficient = Quantity {
    dimension: PhantomData,
    units: PhantomData,
    value: 5.67e-8,
};

/// Raises an absolute temperature to the fourth power.
#[must_use]
pub fn fourth_power(temperature: ThermodynamicTemperature) -> TemperatureFourthPower {
    Quantity {
        dimension: PhantomData,
        units: PhantomData,
        value: temperature.get::<kelvin>().powi(4),
    }
}
