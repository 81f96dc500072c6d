//! Builder pattern API for solving equation systems
//!
//! Provides a fluent interface for configuring and executing a solve.
//!
//! # Example
//! ```
//! use symb_solve::{Solver, SolverConfig};
//!
//! let solution = Solver::new()
//!     .config(SolverConfig::default().with_epsilon(1e-12))
//!     .solve(&["x + y = 3", "x - y = 1"], &[])
//!     .unwrap();
//! assert_eq!(solution[0].0, 'x');
//! assert!((solution[0].1 - 2.0).abs() < 1e-9);
//! ```

use crate::equation::EquationSystem;
use crate::error::SolveError;
use crate::solver::linear::{LinearSolve, LuSolver};
use crate::solver::{SystemState, solve_system};

/// Numeric parameters of the solver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence tolerance on both `‖F‖₁` and `‖δ‖₁`
    pub epsilon: f64,
    /// Newton iterations before a run is declared divergent
    pub max_iterations: usize,
    /// Cap on roots extracted from a single polynomial equation
    pub max_deflation_rounds: usize,
    /// Two roots closer than this are the same root
    pub root_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            epsilon: 1e-10,
            max_iterations: 100_000,
            max_deflation_rounds: 100,
            root_tolerance: 1e-4,
        }
    }
}

impl SolverConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_max_deflation_rounds(mut self, rounds: usize) -> Self {
        self.max_deflation_rounds = rounds;
        self
    }

    pub fn with_root_tolerance(mut self, tolerance: f64) -> Self {
        self.root_tolerance = tolerance;
        self
    }
}

/// Builder for solve operations
#[derive(Debug, Clone, Default)]
pub struct Solver<L: LinearSolve = LuSolver> {
    config: SolverConfig,
    linear: L,
}

impl Solver {
    /// Create a solver with default settings and the LU linear solve
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: LinearSolve> Solver<L> {
    /// Replace the numeric configuration
    pub fn config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a different linear solve for the Newton steps
    pub fn linear_solver<M: LinearSolve>(self, linear: M) -> Solver<M> {
        Solver {
            config: self.config,
            linear,
        }
    }

    /// The numeric configuration in use
    pub fn solver_config(&self) -> &SolverConfig {
        &self.config
    }

    /// Parse, validate and solve a system of equations
    ///
    /// `initial` holds one starting value per variable in order of first
    /// appearance (see [`crate::variables`]); an empty or mismatched guess
    /// starts every variable at `1.0`.
    ///
    /// # Errors
    /// Returns `SolveError` if any equation fails to parse, the system is
    /// not square, or the numeric method fails.
    pub fn solve<S: AsRef<str>>(
        &self,
        equations: &[S],
        initial: &[f64],
    ) -> Result<Vec<(char, f64)>, SolveError> {
        let system = EquationSystem::parse(equations)?;
        self.solve_system(&system, initial)
    }

    /// Solve an already assembled system
    pub fn solve_system(
        &self,
        system: &EquationSystem,
        initial: &[f64],
    ) -> Result<Vec<(char, f64)>, SolveError> {
        solve_system(system, initial, &self.config, &self.linear)
    }

    /// [`Solver::solve`] with the failure collapsed into a [`SystemState`]
    pub fn resolve<S: AsRef<str>>(
        &self,
        equations: &[S],
        initial: &[f64],
    ) -> (Vec<(char, f64)>, SystemState) {
        match self.solve(equations, initial) {
            Ok(solution) => (solution, SystemState::Correct),
            Err(err) => (Vec::new(), SystemState::from_error(&err)),
        }
    }
}
