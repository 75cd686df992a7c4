use uom::si::{
    f64::{Power, TemperatureInterval, ThermodynamicTemperature, Time},
    power::watt,
};

use super::{BodyParameters, Conditions, flux};

/// Heat-flux breakdown for one body temperature and set of conditions.
///
/// Every term except [`evaporative`](Self::evaporative) is signed as heat
/// gained by the body; evaporation is a non-negative loss (for nominal
/// inputs) that [`net`](Self::net) subtracts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBalance {
    /// Body temperature the balance was evaluated at.
    pub body_temperature: ThermodynamicTemperature,

    /// Absorbed sunlight, zero in shade.
    pub solar: Power,

    /// Convective exchange with the air.
    pub convective: Power,

    /// Long-wave exchange with the ground and sky.
    pub radiative: Power,

    /// Conduction to or from the ground.
    pub conductive: Power,

    /// Heat from muscular exertion.
    pub metabolic: Power,

    /// Evaporative loss.
    pub evaporative: Power,
}

impl EnergyBalance {
    /// Evaluates every flux term.
    pub(crate) fn evaluate(
        params: &BodyParameters,
        body: ThermodynamicTemperature,
        conditions: &Conditions<'_>,
    ) -> Self {
        let air = conditions.air();
        let earth = conditions.earth();

        Self {
            body_temperature: body,
            solar: flux::solar(params, conditions.is_shade),
            convective: flux::convective(params, air, body),
            radiative: flux::radiative(params, air, earth, body),
            conductive: flux::conductive(params, earth, body),
            metabolic: flux::metabolic(params, conditions.action),
            evaporative: flux::evaporative(params, conditions.evaporative_action),
        }
    }

    /// Net heat gained by the body.
    #[must_use]
    pub fn net(&self) -> Power {
        self.solar + self.convective + self.radiative + self.conductive + self.metabolic
            - self.evaporative
    }

    /// Temperature change over `dt` at the current rate, `dQ / (C * M) * dt`.
    #[must_use]
    pub fn temperature_change(&self, params: &BodyParameters, dt: Time) -> TemperatureInterval {
        self.net() / params.heat_capacity() * dt
    }

    /// Body temperature after one explicit-Euler step of length `dt`.
    #[must_use]
    pub fn advance(&self, params: &BodyParameters, dt: Time) -> ThermodynamicTemperature {
        self.body_temperature + self.temperature_change(params, dt)
    }

    /// Net heat gain in watts, handy for logging.
    pub(crate) fn net_watts(&self) -> f64 {
        self.net().get::<watt>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::kelvin,
        time::second,
    };

    use crate::models::thermal::body::core::test_support::{GOLDEN_NET_WATTS, desert};
    use crate::support::units::CelsiusEquivalent;

    #[test]
    fn desert_breakdown() {
        let params = BodyParameters::default();
        let action = [0.0; 8];
        let body = ThermodynamicTemperature::from_celsius_equivalent(38.0);

        let balance = EnergyBalance::evaluate(&params, body, &desert(&action));

        assert_relative_eq!(balance.solar.get::<watt>(), 3.59424, epsilon = 1e-12);
        assert_relative_eq!(balance.convective.get::<watt>(), -0.90288, epsilon = 1e-12);
        assert_relative_eq!(
            balance.radiative.get::<watt>(),
            -0.242_301_267_341_28,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            balance.conductive.get::<watt>(),
            0.428_373_333_333_333,
            epsilon = 1e-12
        );
        assert_eq!(balance.metabolic.get::<watt>(), 0.0);
        assert_relative_eq!(balance.evaporative.get::<watt>(), 0.05168, epsilon = 1e-12);
        assert_relative_eq!(balance.net_watts(), GOLDEN_NET_WATTS, epsilon = 1e-9);
    }

    #[test]
    fn euler_step_uses_heat_capacity() {
        let params = BodyParameters::default();
        let action = [0.0; 8];
        let body = ThermodynamicTemperature::from_celsius_equivalent(38.0);
        let dt = Time::new::<second>(0.05);

        let balance = EnergyBalance::evaluate(&params, body, &desert(&action));
        let expected = GOLDEN_NET_WATTS / (3762.0 * 0.19) * 0.05;

        assert_relative_eq!(
            balance.temperature_change(&params, dt).get::<delta_kelvin>(),
            expected,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            balance.advance(&params, dt).get::<kelvin>(),
            311.0 + expected,
            epsilon = 1e-12
        );
    }
}
