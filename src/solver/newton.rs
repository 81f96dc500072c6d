//! Newton-Raphson iteration over a square system
//!
//! Each step evaluates `F(x)` and `J(x)`, solves `J δ = -F` and moves to
//! `x + δ`. The run converges when `‖F‖₁` or `‖δ‖₁` drops below epsilon and
//! diverges on any non-finite value, a singular Jacobian, or the iteration
//! cap.

use log::{debug, trace, warn};
use nalgebra::{DMatrix, DVector};

use crate::ast::Expr;
use crate::builder::SolverConfig;
use crate::error::SolveError;
use crate::jacobian::{JacobianMatrix, ResidualVector};
use crate::solver::linear::LinearSolve;

/// State tag of a single Newton-Raphson run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// Neither converged nor diverged yet
    Iterating,
    /// `‖F‖₁` or the last step `‖δ‖₁` fell below epsilon
    Converged,
    /// Non-finite value, singular Jacobian, or iteration cap reached
    Diverged,
}

/// One Newton-Raphson run; owns the current guess and iteration count
pub(crate) struct NewtonRun<'a, L: LinearSolve> {
    jacobian: JacobianMatrix,
    residuals: ResidualVector,
    variables: &'a [char],
    config: &'a SolverConfig,
    linear: &'a L,
    values: DVector<f64>,
    iterations: usize,
    state: SolverState,
}

impl<'a, L: LinearSolve> NewtonRun<'a, L> {
    pub(crate) fn new(
        residuals: &[Expr],
        variables: &'a [char],
        initial: &[f64],
        config: &'a SolverConfig,
        linear: &'a L,
    ) -> Self {
        NewtonRun {
            jacobian: JacobianMatrix::build(residuals, variables),
            residuals: ResidualVector::new(residuals.to_vec()),
            variables,
            config,
            linear,
            values: initial_guess(initial, variables.len()),
            iterations: 0,
            state: SolverState::Iterating,
        }
    }

    pub(crate) fn state(&self) -> SolverState {
        self.state
    }

    pub(crate) fn iterations(&self) -> usize {
        self.iterations
    }

    /// Current `(variable, value)` assignment
    pub(crate) fn bindings(&self) -> Vec<(char, f64)> {
        self.variables
            .iter()
            .copied()
            .zip(self.values.iter().copied())
            .collect()
    }

    /// Iterate until the run leaves `Iterating`
    pub(crate) fn run(mut self) -> Result<Vec<(char, f64)>, SolveError> {
        while self.state() == SolverState::Iterating {
            self.step()?;
        }
        match self.state() {
            SolverState::Converged => {
                debug!("converged after {} iteration(s)", self.iterations());
                Ok(self.bindings())
            }
            _ => Err(SolveError::Diverged {
                iterations: self.iterations(),
            }),
        }
    }

    /// Perform one iteration
    pub(crate) fn step(&mut self) -> Result<SolverState, SolveError> {
        if self.state != SolverState::Iterating {
            return Ok(self.state);
        }

        let bindings = self.bindings();
        let f = self.residuals.evaluate(&bindings)?;
        let j = self.jacobian.evaluate(&bindings)?;

        let residual_norm = f.lp_norm(1);
        trace!("iteration {}: |F| = {:e}", self.iterations, residual_norm);
        if residual_norm < self.config.epsilon {
            self.state = SolverState::Converged;
            return Ok(self.state);
        }

        if !is_finite_vector(&f) || !is_finite_matrix(&j) {
            debug!("non-finite residual or Jacobian at iteration {}", self.iterations);
            self.state = SolverState::Diverged;
            return Ok(self.state);
        }

        let Some(delta) = self.linear.solve(&j, &(-f)) else {
            debug!("singular Jacobian at iteration {}", self.iterations);
            self.state = SolverState::Diverged;
            return Ok(self.state);
        };
        if !is_finite_vector(&delta) {
            debug!("non-finite step at iteration {}", self.iterations);
            self.state = SolverState::Diverged;
            return Ok(self.state);
        }

        self.values += &delta;
        let step_norm = delta.lp_norm(1);
        trace!("iteration {}: |dx| = {:e}", self.iterations, step_norm);
        if step_norm < self.config.epsilon {
            self.state = SolverState::Converged;
        }

        self.iterations += 1;
        if self.state == SolverState::Iterating && self.iterations >= self.config.max_iterations {
            warn!("iteration cap of {} reached", self.config.max_iterations);
            self.state = SolverState::Diverged;
        }
        Ok(self.state)
    }
}

/// Run Newton-Raphson on `residuals` to convergence
pub(crate) fn newton_raphson<L: LinearSolve>(
    residuals: &[Expr],
    variables: &[char],
    initial: &[f64],
    config: &SolverConfig,
    linear: &L,
) -> Result<Vec<(char, f64)>, SolveError> {
    NewtonRun::new(residuals, variables, initial, config, linear).run()
}

/// The caller's guess, or all ones when it is missing, has the wrong
/// length, or contains a non-finite value
fn initial_guess(initial: &[f64], n: usize) -> DVector<f64> {
    if initial.len() == n && initial.iter().all(|v| v.is_finite()) {
        DVector::from_column_slice(initial)
    } else {
        DVector::from_element(n, 1.0)
    }
}

fn is_finite_vector(v: &DVector<f64>) -> bool {
    v.iter().all(|x| x.is_finite())
}

fn is_finite_matrix(m: &DMatrix<f64>) -> bool {
    m.iter().all(|x| x.is_finite())
}
