#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{
        Area, HeatCapacity, HeatFluxDensity, HeatTransfer, Length, Mass, Power,
        SpecificHeatCapacity, ThermalConductivity,
    },
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass::kilogram,
    power::watt,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::{
    constraint::{ConstraintError, NonNegative, StrictlyPositive, UnitInterval},
    units::{MassSpecificPower, STEFAN_BOLTZMANN, StefanBoltzmannCoefficient},
};

/// Physical constants of a simulated body.
///
/// The body is a single homogeneous thermal mass. Surface areas are stored as
/// fractions of [`surface_area`](Self::surface_area) and resolved through the
/// `area_*` accessors.
///
/// Each [`ThermalModel`](crate::models::thermal::body::ThermalModel) owns its
/// own table, so agents sharing a simulation can be configured independently.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BodyParameters {
    /// Body mass.
    pub mass: Mass,

    /// Specific heat capacity of body tissue.
    pub specific_heat: SpecificHeatCapacity,

    /// Skin thickness. Conduction to the ground runs through half of it.
    pub skin_thickness: Length,

    /// Thermal conductivity of the skin.
    pub conductivity: ThermalConductivity,

    /// Convective heat transfer coefficient to the surrounding air.
    pub convective_coefficient: HeatTransfer,

    /// Solar irradiance reaching an unshaded body.
    pub solar_irradiance: HeatFluxDensity,

    /// Fraction of incident solar radiation absorbed by the skin.
    pub absorptivity: f64,

    /// Total body surface area.
    pub surface_area: Area,

    /// Fraction of the surface projected toward the sun.
    pub projected_fraction: f64,

    /// Fraction of the surface facing the sky.
    pub dorsal_fraction: f64,

    /// Fraction of the surface facing the ground.
    pub ventral_fraction: f64,

    /// Fraction of the surface exposed to air.
    pub air_fraction: f64,

    /// Fraction of the surface in contact with the ground.
    pub contact_fraction: f64,

    /// Long-wave emissivity of the skin.
    pub skin_emissivity: f64,

    /// Long-wave emissivity of the ground.
    pub ground_emissivity: f64,

    /// Stefan–Boltzmann constant used for both radiative exchanges.
    pub stefan_boltzmann: StefanBoltzmannCoefficient,

    /// Heat produced per unit squared action component.
    pub motor_coefficient: Power,

    /// Evaporative loss per unit body mass at minimum evaporation.
    pub min_evaporation_per_mass: MassSpecificPower,

    /// Evaporative loss at maximum evaporation.
    pub max_evaporation: Power,
}

/// Errors reported by [`BodyParameters::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// A field violates its numeric constraint.
    #[error("invalid body parameter `{field}`: {source}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,

        #[source]
        source: ConstraintError,
    },

    /// The TOML table could not be parsed.
    #[cfg(feature = "serde")]
    #[error("failed to parse body parameters")]
    Parse(#[from] toml::de::Error),
}

impl Default for BodyParameters {
    fn default() -> Self {
        Self {
            mass: Mass::new::<kilogram>(0.19),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(3762.0),
            skin_thickness: Length::new::<meter>(0.015),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.502),
            convective_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(10.45),
            solar_irradiance: HeatFluxDensity::new::<watt_per_square_meter>(300.0),
            absorptivity: 0.936,
            surface_area: Area::new::<square_meter>(0.032),
            projected_fraction: 0.4,
            dorsal_fraction: 0.6,
            ventral_fraction: 0.3,
            air_fraction: 0.9,
            contact_fraction: 0.1,
            skin_emissivity: 0.95,
            ground_emissivity: 0.95,
            stefan_boltzmann: STEFAN_BOLTZMANN,
            motor_coefficient: Power::new::<watt>(1.0),
            min_evaporation_per_mass: Power::new::<watt>(0.272) / Mass::new::<kilogram>(1.0),
            max_evaporation: Power::new::<watt>(0.3),
        }
    }
}

impl BodyParameters {
    /// Surface area intercepting direct sunlight.
    #[must_use]
    pub fn area_projected(&self) -> Area {
        self.surface_area * self.projected_fraction
    }

    /// Surface area exchanging long-wave radiation with the sky.
    #[must_use]
    pub fn area_dorsal(&self) -> Area {
        self.surface_area * self.dorsal_fraction
    }

    /// Surface area exchanging long-wave radiation with the ground.
    #[must_use]
    pub fn area_ventral(&self) -> Area {
        self.surface_area * self.ventral_fraction
    }

    /// Surface area exchanging heat with air by convection.
    #[must_use]
    pub fn area_air(&self) -> Area {
        self.surface_area * self.air_fraction
    }

    /// Surface area conducting heat to the ground.
    #[must_use]
    pub fn area_contact(&self) -> Area {
        self.surface_area * self.contact_fraction
    }

    /// Heat capacity of the whole body, `C * M`.
    #[must_use]
    pub fn heat_capacity(&self) -> HeatCapacity {
        self.specific_heat * self.mass
    }

    /// Evaporative loss at minimum evaporation, proportional to body mass.
    #[must_use]
    pub fn min_evaporation(&self) -> Power {
        self.min_evaporation_per_mass * self.mass
    }

    /// Checks every field against its physical constraint.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ParameterError> {
        fn check<T>(
            field: &'static str,
            result: Result<T, ConstraintError>,
        ) -> Result<(), ParameterError> {
            result
                .map(|_| ())
                .map_err(|source| ParameterError::Invalid { field, source })
        }

        check("mass", StrictlyPositive::new(self.mass))?;
        check("specific_heat", StrictlyPositive::new(self.specific_heat))?;
        check("skin_thickness", StrictlyPositive::new(self.skin_thickness))?;
        check("surface_area", StrictlyPositive::new(self.surface_area))?;

        check("conductivity", NonNegative::new(self.conductivity))?;
        check(
            "convective_coefficient",
            NonNegative::new(self.convective_coefficient),
        )?;
        check("solar_irradiance", NonNegative::new(self.solar_irradiance))?;
        check("stefan_boltzmann", NonNegative::new(self.stefan_boltzmann))?;
        check("motor_coefficient", NonNegative::new(self.motor_coefficient))?;
        check(
            "min_evaporation_per_mass",
            NonNegative::new(self.min_evaporation_per_mass),
        )?;
        check("max_evaporation", NonNegative::new(self.max_evaporation))?;

        check("absorptivity", UnitInterval::new(self.absorptivity))?;
        check("projected_fraction", UnitInterval::new(self.projected_fraction))?;
        check("dorsal_fraction", UnitInterval::new(self.dorsal_fraction))?;
        check("ventral_fraction", UnitInterval::new(self.ventral_fraction))?;
        check("air_fraction", UnitInterval::new(self.air_fraction))?;
        check("contact_fraction", UnitInterval::new(self.contact_fraction))?;
        check("skin_emissivity", UnitInterval::new(self.skin_emissivity))?;
        check("ground_emissivity", UnitInterval::new(self.ground_emissivity))?;

        Ok(())
    }

    /// Parses a TOML table, filling unspecified fields from the defaults.
    ///
    /// Dimensional fields are read in SI base units (kg, m, W, ...).
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Parse`] for malformed TOML and
    /// [`ParameterError::Invalid`] if the resulting table fails validation.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(input: &str) -> Result<Self, ParameterError> {
        let params: Self = toml::from_str(input)?;
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::heat_capacity::joule_per_kelvin;

    #[test]
    fn default_table() {
        let params = BodyParameters::default();
        assert!(params.validate().is_ok());

        assert_relative_eq!(params.area_projected().get::<square_meter>(), 0.4 * 0.032);
        assert_relative_eq!(params.area_dorsal().get::<square_meter>(), 0.6 * 0.032);
        assert_relative_eq!(params.area_ventral().get::<square_meter>(), 0.3 * 0.032);
        assert_relative_eq!(params.area_air().get::<square_meter>(), 0.9 * 0.032);
        assert_relative_eq!(params.area_contact().get::<square_meter>(), 0.1 * 0.032);

        assert_relative_eq!(
            params.heat_capacity().get::<joule_per_kelvin>(),
            3762.0 * 0.19,
            epsilon = 1e-9
        );
        assert_relative_eq!(params.min_evaporation().get::<watt>(), 0.272 * 0.19);
        assert_relative_eq!(params.max_evaporation.get::<watt>(), 0.3);
    }

    #[test]
    fn rejects_non_physical_values() {
        let params = BodyParameters {
            mass: Mass::new::<kilogram>(0.0),
            ..BodyParameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParameterError::Invalid {
                field: "mass",
                source: ConstraintError::Zero,
            })
        );

        let params = BodyParameters {
            skin_emissivity: 1.2,
            ..BodyParameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParameterError::Invalid {
                field: "skin_emissivity",
                source: ConstraintError::AboveMaximum,
            })
        );

        let params = BodyParameters {
            convective_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(f64::NAN),
            ..BodyParameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParameterError::Invalid {
                field: "convective_coefficient",
                source: ConstraintError::NotANumber,
            })
        );
    }

    #[test]
    fn zero_gains_are_allowed() {
        let params = BodyParameters {
            solar_irradiance: HeatFluxDensity::new::<watt_per_square_meter>(0.0),
            motor_coefficient: Power::new::<watt>(0.0),
            ..BodyParameters::default()
        };
        assert!(params.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_overrides_defaults() {
        let params = BodyParameters::from_toml_str(
            r"
            mass = 0.25
            absorptivity = 0.8
            ",
        )
        .expect("partial table should parse");

        assert_relative_eq!(params.mass.get::<kilogram>(), 0.25);
        assert_relative_eq!(params.absorptivity, 0.8);
        assert_eq!(
            params.specific_heat,
            BodyParameters::default().specific_heat
        );

        assert!(matches!(
            BodyParameters::from_toml_str("absorptivity = 2.0"),
            Err(ParameterError::Invalid {
                field: "absorptivity",
                ..
            })
        ));
        let err = BodyParameters::from_toml_str("mass = \"heavy\"").unwrap_err();
        assert!(matches!(err, ParameterError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
