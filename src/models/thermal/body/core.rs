//! Single-compartment energy balance for a body exchanging heat with its
//! surroundings.
//!
//! The body gains or loses heat through six channels: absorbed sunlight,
//! convection to air, long-wave radiation to ground and sky, conduction into
//! the ground, motor (metabolic) heat, and evaporation. Their sum divided by
//! the body's heat capacity is the rate of temperature change.

mod balance;
mod conditions;
mod flux;
mod parameters;

#[cfg(test)]
pub(crate) mod test_support;

pub use balance::EnergyBalance;
pub use conditions::{Conditions, ConditionsError};
pub use parameters::{BodyParameters, ParameterError};

pub(crate) use conditions::validate_dt;
