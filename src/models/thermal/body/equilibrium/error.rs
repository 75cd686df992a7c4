use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Power;

use crate::models::thermal::body::{ConditionsError, ParameterError};

/// Errors that can occur while solving for the steady-state body temperature.
#[derive(Debug, Error)]
pub enum EquilibriumError {
    /// The parameter table is invalid.
    #[error("invalid parameters")]
    Parameters(#[from] ParameterError),

    /// The conditions contain non-finite values.
    #[error("invalid conditions")]
    Conditions(#[from] ConditionsError),

    /// The bisection solver encountered an error, e.g. a bracket that does not
    /// straddle the equilibrium.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best net heat gain residual achieved.
        residual: Power,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

/// Errors from evaluating a candidate body temperature.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CandidateError {
    /// The candidate lies at or below absolute zero.
    #[error("candidate body temperature is not above absolute zero: {kelvin} K")]
    BelowAbsoluteZero { kelvin: f64 },
}
