//! Body-temperature model for a simulated agent.
//!
//! [`ThermalModel`] owns a body temperature and a [`BodyParameters`] table and
//! advances the temperature one explicit-Euler step at a time from the
//! [`Conditions`] an environment supplies each tick.
//!
//! Temperatures cross this API as Celsius-equivalent degrees: absolute
//! temperature minus exactly 273. The absolute scale never leaks out.
//!
//! The computational core lives in the internal `core` module. On top of it
//! sit steady-state solving ([`equilibrium`]) and scenario playback
//! ([`trajectory`]).

pub(crate) mod core;
pub mod equilibrium;
pub mod trajectory;

pub use self::core::{
    BodyParameters, Conditions, ConditionsError, EnergyBalance, ParameterError,
};

use uom::si::f64::{ThermodynamicTemperature, Time};

use crate::support::units::CelsiusEquivalent;

use self::core::validate_dt;

/// Default initial body temperature, in Celsius-equivalent degrees.
pub const DEFAULT_BODY_TEMPERATURE: f64 = 38.0;

/// Stateful body-temperature model.
///
/// The model is deterministic: the same parameters, initial temperature and
/// sequence of [`step`](Self::step) inputs always produce bit-identical
/// results. It performs no sub-stepping and no stability checks, so callers
/// pick a `dt` small enough for explicit Euler to stay stable.
///
/// # Example
///
/// ```
/// use thermoreg_models::models::thermal::body::{Conditions, ThermalModel};
/// use uom::si::{f64::Time, time::second};
///
/// let mut model = ThermalModel::default();
/// let shade = Conditions {
///     action: &[0.0; 8],
///     evaporative_action: 1.0,
///     temp_air: 20.0,
///     temp_earth: 20.0,
///     is_shade: true,
/// };
///
/// for _ in 0..100 {
///     model.step(&shade, Time::new::<second>(0.05));
/// }
/// assert!(model.temperature() < 38.0);
///
/// model.reset(None);
/// assert_eq!(model.temperature(), 38.0);
/// ```
#[derive(Debug, Clone)]
pub struct ThermalModel {
    params: BodyParameters,
    initial: ThermodynamicTemperature,
    temperature: ThermodynamicTemperature,
    diverged: bool,
}

impl Default for ThermalModel {
    fn default() -> Self {
        Self::new(DEFAULT_BODY_TEMPERATURE)
    }
}

impl ThermalModel {
    /// Creates a model with the default [`BodyParameters`].
    ///
    /// `temp_init` is the initial body temperature in Celsius-equivalent degrees.
    #[must_use]
    pub fn new(temp_init: f64) -> Self {
        Self::from_parts(BodyParameters::default(), temp_init)
    }

    /// Creates a model with a custom parameter table.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the table fails validation.
    pub fn with_parameters(params: BodyParameters, temp_init: f64) -> Result<Self, ParameterError> {
        params.validate()?;
        Ok(Self::from_parts(params, temp_init))
    }

    fn from_parts(params: BodyParameters, temp_init: f64) -> Self {
        let initial = ThermodynamicTemperature::from_celsius_equivalent(temp_init);
        tracing::debug!(temp_init, "created body thermal model");
        Self {
            params,
            initial,
            temperature: initial,
            diverged: false,
        }
    }

    /// The parameter table this model was built with.
    #[must_use]
    pub fn parameters(&self) -> &BodyParameters {
        &self.params
    }

    /// Current body temperature in Celsius-equivalent degrees.
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature.celsius_equivalent()
    }

    /// Temperature restored by [`reset`](Self::reset), in Celsius-equivalent degrees.
    #[must_use]
    pub fn initial_temperature(&self) -> f64 {
        self.initial.celsius_equivalent()
    }

    /// Restores the body temperature.
    ///
    /// With `Some(temp_init)`, the reset target is replaced first. With `None`,
    /// the previously configured target is reused.
    pub fn reset(&mut self, temp_init: Option<f64>) {
        if let Some(temp_init) = temp_init {
            self.initial = ThermodynamicTemperature::from_celsius_equivalent(temp_init);
        }
        self.temperature = self.initial;
        self.diverged = false;
        tracing::debug!(temp = self.temperature(), "reset body thermal model");
    }

    /// Heat-flux breakdown at the current body temperature.
    ///
    /// Does not change the model's state.
    #[must_use]
    pub fn energy_balance(&self, conditions: &Conditions<'_>) -> EnergyBalance {
        EnergyBalance::evaluate(&self.params, self.temperature, conditions)
    }

    /// Advances the body temperature by one explicit-Euler step.
    ///
    /// Returns the new body temperature in Celsius-equivalent degrees.
    ///
    /// Inputs are not validated: non-finite values propagate into the
    /// temperature, and out-of-range evaporative actions extrapolate. Use
    /// [`try_step`](Self::try_step) to reject such inputs instead.
    pub fn step(&mut self, conditions: &Conditions<'_>, dt: Time) -> f64 {
        let balance = self.energy_balance(conditions);
        self.temperature = balance.advance(&self.params, dt);

        let temp = self.temperature();
        tracing::trace!(
            temp,
            net = balance.net_watts(),
            solar = ?balance.solar,
            convective = ?balance.convective,
            radiative = ?balance.radiative,
            conductive = ?balance.conductive,
            metabolic = ?balance.metabolic,
            evaporative = ?balance.evaporative,
            "body thermal step"
        );

        if !temp.is_finite() && !self.diverged {
            self.diverged = true;
            tracing::warn!(temp, "body temperature is no longer finite");
        }

        temp
    }

    /// Like [`step`](Self::step), but rejects non-finite inputs and
    /// non-positive time steps.
    ///
    /// # Errors
    ///
    /// Returns a [`ConditionsError`] and leaves the state unchanged if any
    /// input is invalid.
    pub fn try_step(
        &mut self,
        conditions: &Conditions<'_>,
        dt: Time,
    ) -> Result<f64, ConditionsError> {
        conditions.validate()?;
        validate_dt(dt)?;
        Ok(self.step(conditions, dt))
    }
}
