//! Steady-state body temperature.
//!
//! For fixed [`Conditions`], the body settles where every heat gain is
//! balanced by losses. Convection, conduction and radiation all fall as the
//! body warms, so the net heat gain is monotonic in body temperature and a
//! bracketed bisection finds the root reliably.

mod config;
mod error;
mod problem;

pub use config::EquilibriumConfig;
pub use error::{CandidateError, EquilibriumError};

use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Power, ThermodynamicTemperature},
    power::watt,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::CelsiusEquivalent;

use super::core::{BodyParameters, Conditions, EnergyBalance};

use problem::{EquilibriumModel, EquilibriumProblem};

/// Solves for the body temperature at which the net heat gain is zero.
///
/// The returned [`EnergyBalance`] is evaluated at that temperature; read it
/// back in Celsius-equivalent degrees with
/// [`CelsiusEquivalent::celsius_equivalent`].
///
/// # Errors
///
/// Returns [`EquilibriumError`] if the parameters or conditions are invalid,
/// if the bracket does not straddle the equilibrium, or if the solver fails to
/// converge.
///
/// # Example
///
/// ```
/// use thermoreg_models::models::thermal::body::{
///     BodyParameters, Conditions,
///     equilibrium::{EquilibriumConfig, solve},
/// };
/// use thermoreg_models::support::units::CelsiusEquivalent;
///
/// let conditions = Conditions {
///     action: &[0.0; 8],
///     evaporative_action: -1.0,
///     temp_air: 35.0,
///     temp_earth: 40.0,
///     is_shade: false,
/// };
///
/// let balance = solve(
///     &BodyParameters::default(),
///     &conditions,
///     EquilibriumConfig::default(),
/// )
/// .unwrap();
///
/// let settled = balance.body_temperature.celsius_equivalent();
/// assert!(settled > 38.0 && settled < 60.0);
/// ```
pub fn solve(
    params: &BodyParameters,
    conditions: &Conditions<'_>,
    config: EquilibriumConfig,
) -> Result<EnergyBalance, EquilibriumError> {
    params.validate()?;
    conditions.validate()?;

    let model = EquilibriumModel::new(params, conditions);

    let [low, high] = config.bracket;
    let bracket = [
        ThermodynamicTemperature::from_celsius_equivalent(low).get::<kelvin>(),
        ThermodynamicTemperature::from_celsius_equivalent(high).get::<kelvin>(),
    ];

    let solution = bisection::solve(
        &model,
        &EquilibriumProblem,
        bracket,
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Candidates at or below absolute zero sit under any physical
            // equilibrium, where the body can only gain heat.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(EquilibriumError::MaxIters {
            residual: Power::new::<watt>(solution.residual),
            iters: solution.iters,
        });
    }

    let iters = solution.iters;
    let balance = solution.snapshot.output;
    tracing::debug!(
        temp = balance.body_temperature.celsius_equivalent(),
        iters,
        "solved body equilibrium"
    );

    Ok(balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Time, time::second};

    use crate::models::thermal::body::{ThermalModel, core::test_support::desert};

    #[test]
    fn net_gain_vanishes_at_solution() {
        let action = [0.0; 8];
        let balance = solve(
            &BodyParameters::default(),
            &desert(&action),
            EquilibriumConfig::default(),
        )
        .expect("desert equilibrium should converge");

        assert_relative_eq!(balance.net().get::<watt>(), 0.0, epsilon = 1e-6);

        // At 38 degrees the body still gains heat, so it settles warmer.
        assert!(balance.body_temperature.celsius_equivalent() > 38.0);
    }

    #[test]
    fn model_started_at_equilibrium_stays_there() {
        let action = [0.0; 8];
        let conditions = desert(&action);
        let balance = solve(
            &BodyParameters::default(),
            &conditions,
            EquilibriumConfig::default(),
        )
        .unwrap();
        let settled = balance.body_temperature.celsius_equivalent();

        let mut model = ThermalModel::new(settled);
        for _ in 0..1000 {
            model.step(&conditions, Time::new::<second>(0.05));
        }
        assert_relative_eq!(model.temperature(), settled, epsilon = 1e-6);
    }

    #[test]
    fn shade_and_evaporation_lower_the_equilibrium() {
        let action = [0.0; 8];
        let params = BodyParameters::default();
        let config = EquilibriumConfig::default();

        let sunny = solve(&params, &desert(&action), config).unwrap();
        let shaded = solve(
            &params,
            &Conditions {
                is_shade: true,
                ..desert(&action)
            },
            config,
        )
        .unwrap();
        let sweating = solve(
            &params,
            &Conditions {
                evaporative_action: 1.0,
                ..desert(&action)
            },
            config,
        )
        .unwrap();

        assert!(shaded.body_temperature < sunny.body_temperature);
        assert!(sweating.body_temperature < sunny.body_temperature);
    }

    #[test]
    fn rejects_non_finite_conditions() {
        let action = [f64::NAN];
        let result = solve(
            &BodyParameters::default(),
            &desert(&action),
            EquilibriumConfig::default(),
        );
        assert!(matches!(result, Err(EquilibriumError::Conditions(_))));
    }

    #[test]
    fn reports_iteration_limit() {
        let action = [0.0; 8];
        let config = EquilibriumConfig {
            max_iters: 2,
            ..EquilibriumConfig::default()
        };
        let result = solve(&BodyParameters::default(), &desert(&action), config);
        assert!(matches!(result, Err(EquilibriumError::MaxIters { .. })));
    }
}
