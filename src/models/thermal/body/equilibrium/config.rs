use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Power, TemperatureInterval},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

/// Solver configuration for the steady-state body temperature.
#[derive(Debug, Clone, Copy)]
pub struct EquilibriumConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the body temperature search variable.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance on the net heat gain.
    pub power_tol: Power,

    /// Search bracket in Celsius-equivalent degrees, `[low, high]`.
    ///
    /// The net heat gain must be positive at `low` and negative at `high`.
    pub bracket: [f64; 2],
}

impl Default for EquilibriumConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-10),
            power_tol: Power::new::<watt>(1e-12),
            bracket: [-50.0, 150.0],
        }
    }
}

impl EquilibriumConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.power_tol.get::<watt>(),
        }
    }
}
