//! Parallel batch solving using Rayon
//!
//! Independent systems share nothing, so each one is solved on its own
//! worker with no locking.
//!
//! Enable with the `parallel` feature:
//! ```toml
//! symb_solve = { version = "0.1", features = ["parallel"] }
//! ```

use rayon::prelude::*;

use crate::builder::{Solver, SolverConfig};
use crate::solver::SystemState;

/// One system to solve: its equations and initial guess
pub type SystemInput = (Vec<String>, Vec<f64>);

/// Solve many independent systems in parallel with the default configuration
///
/// Results are returned in input order.
///
/// # Example
/// ```
/// use symb_solve::parallel::resolve_systems_parallel;
/// use symb_solve::SystemState;
///
/// let systems = vec![
///     (vec!["x + y = 3".to_string(), "x - y = 1".to_string()], vec![]),
///     (vec!["x = y".to_string()], vec![]),
/// ];
/// let results = resolve_systems_parallel(&systems);
/// assert_eq!(results[0].1, SystemState::Correct);
/// assert_eq!(results[1].1, SystemState::IncorrectEquations);
/// ```
pub fn resolve_systems_parallel(systems: &[SystemInput]) -> Vec<(Vec<(char, f64)>, SystemState)> {
    resolve_systems_parallel_with(systems, SolverConfig::default())
}

/// [`resolve_systems_parallel`] with a custom configuration
pub fn resolve_systems_parallel_with(
    systems: &[SystemInput],
    config: SolverConfig,
) -> Vec<(Vec<(char, f64)>, SystemState)> {
    let solver = Solver::new().config(config);
    systems
        .par_iter()
        .map(|(equations, initial)| solver.resolve(equations, initial))
        .collect()
}
