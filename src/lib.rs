//! Symbolic Equation System Solver
//!
//! Parses textual equations over single-letter variables, reduces them
//! symbolically, and solves the resulting square system with
//! Newton-Raphson on an exact symbolic Jacobian.
//!
//! # Features
//! - Expression trees with eager algebraic reduction (constant folding,
//!   exponent merging across nested products and quotients, trigonometric
//!   special angles)
//! - Exact symbolic differentiation
//! - **Type-safe expression building** with operator overloading
//! - All distinct real roots of a single polynomial equation via deflation
//! - **Builder pattern API** for custom tolerances and linear solvers
//!
//! # Usage Examples
//!
//! ## Tuple API
//! ```
//! use symb_solve::{resolve_system, SystemState};
//! let (solution, state) = resolve_system(&["x + y = 3", "x - y = 1"], &[]);
//! assert_eq!(state, SystemState::Correct);
//! assert!((solution[0].1 - 2.0).abs() < 1e-9);
//! ```
//!
//! ## Expressions
//! ```
//! use symb_solve::Expr;
//! let x = Expr::variable('x');
//! let expr = x.clone().pow(2.0) + x.sin();
//! assert_eq!(expr.derivative('x').to_string(), "2 * x + cos(x)");
//! ```

mod arithmetic;
mod ast;
mod builder;
mod differentiation;
mod display;
mod equation;
mod error;
mod evaluator;
mod jacobian;
mod parser;
mod simplification;
pub mod solver;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(test)]
mod tests;

// Re-export key types for easier usage
pub use ast::{BinaryOp, Expr, Factorial, UnaryOp};
pub use builder::{Solver, SolverConfig};
pub use equation::{EquationSystem, parse_equation};
pub use error::{SolveError, Span};
pub use jacobian::{JacobianMatrix, ResidualVector};
pub use parser::{parse, parse_opt};
pub use simplification::reduce;
pub use solver::SystemState;
pub use solver::linear::{LinearSolve, LuSolver};
pub use solver::newton::SolverState;

/// Solve a system of equations with the default configuration
///
/// # Arguments
/// * `equations` - One `lhs = rhs` equation per entry
/// * `initial` - Starting value per variable, in the order [`variables`]
///   returns; pass an empty slice to start every variable at `1.0`
///
/// # Returns
/// The `(variable, value)` assignment and [`SystemState::Correct`], or an
/// empty assignment with the failure tag. A single polynomial equation
/// returns every distinct real root found, one pair per root.
///
/// # Example
/// ```
/// use symb_solve::{resolve_system, SystemState};
/// let (roots, state) = resolve_system(&["x^2 - 4 = 0"], &[]);
/// assert_eq!(state, SystemState::Correct);
/// assert_eq!(roots.len(), 2);
/// ```
pub fn resolve_system<S: AsRef<str>>(
    equations: &[S],
    initial: &[f64],
) -> (Vec<(char, f64)>, SystemState) {
    Solver::new().resolve(equations, initial)
}

/// Distinct variables of a list of equations, in order of first appearance
///
/// Does not check that the system is square. Returns an empty list if any
/// equation fails to parse.
///
/// # Example
/// ```
/// assert_eq!(symb_solve::variables(&["y + x = 1", "x = y"]), vec!['y', 'x']);
/// ```
pub fn variables<S: AsRef<str>>(equations: &[S]) -> Vec<char> {
    equation::variables(equations)
}
