//! Problem formulation for the steady-state body temperature.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{f64::ThermodynamicTemperature, power::watt, thermodynamic_temperature::kelvin};

use crate::models::thermal::body::core::{BodyParameters, Conditions, EnergyBalance};

use super::CandidateError;

/// Model adapter exposing the body temperature as the sole input.
///
/// Conditions are held fixed while the solver varies the temperature.
pub(super) struct EquilibriumModel<'a> {
    params: &'a BodyParameters,
    conditions: &'a Conditions<'a>,
}

impl<'a> EquilibriumModel<'a> {
    pub(super) fn new(params: &'a BodyParameters, conditions: &'a Conditions<'a>) -> Self {
        Self { params, conditions }
    }
}

impl Model for EquilibriumModel<'_> {
    type Input = ThermodynamicTemperature;
    type Output = EnergyBalance;
    type Error = CandidateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let absolute = input.get::<kelvin>();
        if absolute <= 0.0 {
            return Err(CandidateError::BelowAbsoluteZero { kelvin: absolute });
        }
        Ok(EnergyBalance::evaluate(self.params, *input, self.conditions))
    }
}

/// Equation problem whose residual is the net heat gain in watts.
pub(super) struct EquilibriumProblem;

impl EquationProblem<1> for EquilibriumProblem {
    type Input = ThermodynamicTemperature;
    type Output = EnergyBalance;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.net().get::<watt>()])
    }
}
