//! Equation assembly: text equations to residual expressions
//!
//! An equation `lhs = rhs` becomes the residual `lhs - rhs`, whose roots
//! are the equation's solutions. A system is accepted only when the number
//! of distinct variables across all residuals equals the number of
//! equations.

use log::debug;

use crate::ast::Expr;
use crate::error::SolveError;
use crate::parser::parse;
use crate::simplification::reduce;

/// Parse a single `lhs = rhs` equation into its reduced residual `lhs - rhs`
///
/// # Example
/// ```
/// use symb_solve::parse_equation;
/// let residual = parse_equation("x + 1 = 3").unwrap();
/// assert_eq!(residual.to_string(), "x + 1 - 3");
/// ```
pub fn parse_equation(text: &str) -> Result<Expr, SolveError> {
    let mut sides = text.split('=');
    let (Some(lhs), Some(rhs)) = (sides.next(), sides.next()) else {
        return Err(SolveError::MissingEquals(text.to_string()));
    };
    if sides.next().is_some() {
        return Err(SolveError::MultipleEquals(text.to_string()));
    }

    let lhs = parse(lhs)?;
    let rhs = parse(rhs)?;
    Ok(reduce(lhs - rhs))
}

/// A well-posed system: one residual per equation and exactly as many
/// distinct variables as residuals
#[derive(Debug, Clone, PartialEq)]
pub struct EquationSystem {
    residuals: Vec<Expr>,
    variables: Vec<char>,
}

impl EquationSystem {
    /// Parse and validate a list of equations
    ///
    /// Variables are listed in order of first appearance across the
    /// residuals.
    pub fn parse<S: AsRef<str>>(equations: &[S]) -> Result<Self, SolveError> {
        if equations.is_empty() {
            return Err(SolveError::EmptySystem);
        }

        let residuals = equations
            .iter()
            .map(|eq| parse_equation(eq.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let variables = collect_variables(&residuals);

        if variables.len() != residuals.len() {
            return Err(SolveError::IllPosedSystem {
                equations: residuals.len(),
                variables: variables.len(),
            });
        }

        debug!(
            "assembled system of {} equation(s) in {:?}",
            residuals.len(),
            variables
        );
        Ok(EquationSystem {
            residuals,
            variables,
        })
    }

    pub fn residuals(&self) -> &[Expr] {
        &self.residuals
    }

    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.residuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residuals.is_empty()
    }

    /// One equation in one variable whose residual is polynomial, so every
    /// root can be enumerated by deflation
    pub fn is_single_polynomial(&self) -> bool {
        matches!(self.residuals.as_slice(), [residual] if residual.is_polynomial())
    }
}

fn collect_variables(residuals: &[Expr]) -> Vec<char> {
    let mut order = Vec::new();
    for residual in residuals {
        residual.push_variables(&mut order);
    }
    order
}

/// Distinct variables of a list of equations in order of first appearance
///
/// The count is not checked against the number of equations, so callers
/// can prompt for initial values before solving. Returns an empty list if
/// any equation fails to parse.
pub fn variables<S: AsRef<str>>(equations: &[S]) -> Vec<char> {
    equations
        .iter()
        .map(|eq| parse_equation(eq.as_ref()))
        .collect::<Result<Vec<_>, _>>()
        .map(|residuals| collect_variables(&residuals))
        .unwrap_or_default()
}
