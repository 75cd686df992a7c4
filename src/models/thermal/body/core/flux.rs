//! Individual heat-flux terms.
//!
//! Every term is a rate of heat gained by the body: positive values warm it.
//! Evaporation is the exception and is returned as a positive loss.

use uom::{
    ConstZero,
    si::f64::{Area, Power, ThermodynamicTemperature},
};

use crate::support::units::{TemperatureDifference, fourth_power};

use super::BodyParameters;

/// Absorbed sunlight, or zero when shaded.
pub(super) fn solar(params: &BodyParameters, is_shade: bool) -> Power {
    if is_shade {
        return Power::ZERO;
    }
    params.area_projected() * params.solar_irradiance * params.absorptivity
}

/// Convection between the air and the exposed surface.
pub(super) fn convective(
    params: &BodyParameters,
    air: ThermodynamicTemperature,
    body: ThermodynamicTemperature,
) -> Power {
    params.convective_coefficient * params.area_air() * air.minus(body)
}

/// Long-wave exchange with the ground (ventral) and the sky (dorsal).
pub(super) fn radiative(
    params: &BodyParameters,
    air: ThermodynamicTemperature,
    earth: ThermodynamicTemperature,
    body: ThermodynamicTemperature,
) -> Power {
    let ground = gray_body_exchange(
        params,
        params.ground_emissivity,
        params.area_ventral(),
        earth,
        body,
    );
    let sky = gray_body_exchange(
        params,
        params.skin_emissivity,
        params.area_dorsal(),
        air,
        body,
    );
    ground + sky
}

/// `eps * A * sigma * (T_env^4 - T_body^4)`.
fn gray_body_exchange(
    params: &BodyParameters,
    emissivity: f64,
    area: Area,
    surroundings: ThermodynamicTemperature,
    body: ThermodynamicTemperature,
) -> Power {
    let difference = fourth_power(surroundings) - fourth_power(body);
    area * emissivity * params.stefan_boltzmann * difference
}

/// Conduction to the ground through half the skin thickness.
pub(super) fn conductive(
    params: &BodyParameters,
    earth: ThermodynamicTemperature,
    body: ThermodynamicTemperature,
) -> Power {
    params.area_contact() * params.conductivity * earth.minus(body) / (params.skin_thickness / 2.0)
}

/// Heat from muscular exertion, `k * sum(a_i^2)`.
pub(super) fn metabolic(params: &BodyParameters, action: &[f64]) -> Power {
    params.motor_coefficient * action.iter().map(|a| a * a).sum::<f64>()
}

/// Evaporative loss, linear from the minimum at `-1` to the maximum at `+1`.
///
/// Inputs outside `[-1, 1]` extrapolate along the same line.
pub(super) fn evaporative(params: &BodyParameters, evaporative_action: f64) -> Power {
    let min = params.min_evaporation();
    let max = params.max_evaporation;
    (max - min) * (0.5 * (evaporative_action + 1.0)) + min
}
