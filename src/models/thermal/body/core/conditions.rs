use thiserror::Error;
use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    time::second,
};

use crate::support::{
    constraint::{ConstraintError, StrictlyPositive},
    units::CelsiusEquivalent,
};

/// Per-step inputs to the body model.
///
/// Temperatures are Celsius-equivalent degrees (absolute minus 273).
/// Nothing here is clamped: an `evaporative_action` outside `[-1, 1]`
/// extrapolates the evaporation rate linearly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions<'a> {
    /// Motor commands. Only their squared sum matters, so any length works.
    pub action: &'a [f64],

    /// Evaporation control, nominally in `[-1, 1]`.
    pub evaporative_action: f64,

    /// Air (and sky) temperature.
    pub temp_air: f64,

    /// Ground temperature.
    pub temp_earth: f64,

    /// Whether the body is shaded from direct sunlight.
    pub is_shade: bool,
}

/// Rejected inputs from [`ThermalModel::try_step`](crate::models::thermal::body::ThermalModel::try_step).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConditionsError {
    #[error("action component {index} is not finite: {value}")]
    NonFiniteAction { index: usize, value: f64 },

    #[error("evaporative action is not finite: {0}")]
    NonFiniteEvaporativeAction(f64),

    #[error("air temperature is not finite: {0}")]
    NonFiniteAirTemperature(f64),

    #[error("ground temperature is not finite: {0}")]
    NonFiniteEarthTemperature(f64),

    #[error("time step must be positive and finite: {0}")]
    TimeStep(#[source] ConstraintError),
}

impl Conditions<'_> {
    /// Air temperature on the absolute scale.
    pub(crate) fn air(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::from_celsius_equivalent(self.temp_air)
    }

    /// Ground temperature on the absolute scale.
    pub(crate) fn earth(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::from_celsius_equivalent(self.temp_earth)
    }

    /// Checks that every input is finite.
    ///
    /// # Errors
    ///
    /// Returns the first non-finite input found.
    pub fn validate(&self) -> Result<(), ConditionsError> {
        if let Some((index, &value)) = self
            .action
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(ConditionsError::NonFiniteAction { index, value });
        }
        if !self.evaporative_action.is_finite() {
            return Err(ConditionsError::NonFiniteEvaporativeAction(
                self.evaporative_action,
            ));
        }
        if !self.temp_air.is_finite() {
            return Err(ConditionsError::NonFiniteAirTemperature(self.temp_air));
        }
        if !self.temp_earth.is_finite() {
            return Err(ConditionsError::NonFiniteEarthTemperature(self.temp_earth));
        }
        Ok(())
    }
}

/// Checks that a time step is strictly positive and finite.
pub(crate) fn validate_dt(dt: Time) -> Result<(), ConditionsError> {
    StrictlyPositive::new(dt).map_err(ConditionsError::TimeStep)?;
    if dt.get::<second>().is_finite() {
        Ok(())
    } else {
        Err(ConditionsError::TimeStep(ConstraintError::AboveMaximum))
    }
}
