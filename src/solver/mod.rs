//! Nonlinear system solver
//!
//! - [`newton`]: Newton-Raphson iteration with convergence and divergence detection
//! - [`deflation`]: enumeration of every root of a single polynomial equation
//! - [`linear`]: the dense linear solve behind each Newton step
pub(crate) mod deflation;
pub mod linear;
pub mod newton;

use log::{debug, error};

use crate::builder::SolverConfig;
use crate::equation::EquationSystem;
use crate::error::SolveError;
use linear::LinearSolve;

/// Outcome tag of a system solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemState {
    /// A solution was found
    Correct,
    /// The equations could not be parsed or the system is not square
    IncorrectEquations,
    /// The numeric method failed on a well-posed system
    Error,
}

impl SystemState {
    /// Map a failure onto the tag reported to callers
    pub fn from_error(err: &SolveError) -> Self {
        if err.is_incorrect_equations() {
            SystemState::IncorrectEquations
        } else {
            SystemState::Error
        }
    }
}

/// Solve an assembled system; a single polynomial equation yields all of
/// its distinct real roots
pub(crate) fn solve_system<L: LinearSolve>(
    system: &EquationSystem,
    initial: &[f64],
    config: &SolverConfig,
    linear: &L,
) -> Result<Vec<(char, f64)>, SolveError> {
    let result = if let ([residual], [variable]) = (system.residuals(), system.variables())
        && system.is_single_polynomial()
    {
        debug!("enumerating roots of polynomial in '{variable}'");
        deflation::find_all_roots(residual, *variable, initial, config, linear)
    } else {
        newton::newton_raphson(system.residuals(), system.variables(), initial, config, linear)
    };

    if let Err(SolveError::UnboundVariable(var)) = &result {
        // Bindings always cover the system's variables
        error!("evaluation hit unbound variable '{var}'");
    }
    result
}
