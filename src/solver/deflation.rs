//! Root enumeration for a single polynomial equation
//!
//! Newton-Raphson finds one root `r`; the residual is then divided by
//! `(x - r)` and the search repeats on the quotient, so later runs are
//! pushed towards the remaining roots.
//!
//! Every round starts from the caller's guess. The quotient is `0/0` at an
//! accepted root, so a guess sitting on one is shifted off it first.

use log::debug;

use crate::ast::Expr;
use crate::builder::SolverConfig;
use crate::error::SolveError;
use crate::simplification::reduce;
use crate::solver::linear::LinearSolve;
use crate::solver::newton::newton_raphson;

/// Find every distinct real root of `residual` in `variable`
///
/// Stops at the first run that fails to converge or after
/// `max_deflation_rounds` deflations. Fails with
/// [`SolveError::NoRootFound`] if not a single run converged.
pub(crate) fn find_all_roots<L: LinearSolve>(
    residual: &Expr,
    variable: char,
    initial: &[f64],
    config: &SolverConfig,
    linear: &L,
) -> Result<Vec<(char, f64)>, SolveError> {
    let variables = [variable];
    let mut current = residual.clone();
    let mut roots: Vec<(char, f64)> = Vec::new();

    for round in 0..config.max_deflation_rounds {
        let start = starting_point(initial, &roots, variable, config.root_tolerance);
        let root = match newton_raphson(
            std::slice::from_ref(&current),
            &variables,
            &[start],
            config,
            linear,
        ) {
            Ok(solution) => match solution.first() {
                Some(&root) => root,
                None => break,
            },
            Err(SolveError::Diverged { iterations }) => {
                debug!("deflation round {round}: no further root ({iterations} iteration(s))");
                break;
            }
            Err(err) => return Err(err),
        };

        debug!("deflation round {round}: root {} = {}", root.0, root.1);
        current = reduce(current / (Expr::variable(root.0) - Expr::number(root.1)));
        if !is_known_root(&roots, root, config.root_tolerance) {
            roots.push(root);
        }
    }

    if roots.is_empty() {
        Err(SolveError::NoRootFound)
    } else {
        Ok(roots)
    }
}

/// The caller's guess (`1.0` when absent or malformed), stepped away from
/// any accepted root it lies on
fn starting_point(initial: &[f64], roots: &[(char, f64)], variable: char, tolerance: f64) -> f64 {
    let mut start = match initial {
        [value] if value.is_finite() => *value,
        _ => 1.0,
    };
    let step = 10.0 * tolerance.max(f64::EPSILON) * start.abs().max(1.0);
    // Each shift clears at most one root, so this many shifts always suffice
    for _ in 0..=roots.len() {
        if !is_known_root(roots, (variable, start), tolerance) {
            break;
        }
        start += step;
    }
    start
}

/// Same variable and value within `tolerance` of an accepted root
fn is_known_root(roots: &[(char, f64)], candidate: (char, f64), tolerance: f64) -> bool {
    roots
        .iter()
        .any(|&(var, value)| var == candidate.0 && (value - candidate.1).abs() < tolerance)
}
