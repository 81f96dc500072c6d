//! Jacobian matrix and residual vector evaluators
//!
//! Both hold expression trees built once per solve and are re-evaluated at
//! every Newton iteration with the current variable bindings.

use nalgebra::{DMatrix, DVector};

use crate::ast::Expr;
use crate::error::SolveError;

/// Symbolic matrix of partial derivatives, row-major: entry `(i, j)` is
/// `d residuals[i] / d variables[j]`
///
/// A solvable system is square, but the matrix itself takes any shape so
/// that it can be inspected for ill-posed input too.
#[derive(Debug, Clone)]
pub struct JacobianMatrix {
    entries: Vec<Expr>,
    rows: usize,
    cols: usize,
}

impl JacobianMatrix {
    pub fn build(residuals: &[Expr], variables: &[char]) -> Self {
        let entries = residuals
            .iter()
            .flat_map(|residual| variables.iter().map(move |&var| residual.derivative(var)))
            .collect();
        JacobianMatrix {
            entries,
            rows: residuals.len(),
            cols: variables.len(),
        }
    }

    /// The symbolic entry `(row, col)`
    pub fn entry(&self, row: usize, col: usize) -> Option<&Expr> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.entries.get(row * self.cols + col)
    }

    /// Number of residuals
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of variables
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn evaluate(&self, bindings: &[(char, f64)]) -> Result<DMatrix<f64>, SolveError> {
        let values = self
            .entries
            .iter()
            .map(|entry| entry.evaluate(bindings))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DMatrix::from_row_slice(self.rows, self.cols, &values))
    }
}

/// Residual expressions `F(x)`
#[derive(Debug, Clone)]
pub struct ResidualVector {
    residuals: Vec<Expr>,
}

impl ResidualVector {
    pub fn new(residuals: Vec<Expr>) -> Self {
        ResidualVector { residuals }
    }

    pub fn residuals(&self) -> &[Expr] {
        &self.residuals
    }

    pub fn evaluate(&self, bindings: &[(char, f64)]) -> Result<DVector<f64>, SolveError> {
        let values = self
            .residuals
            .iter()
            .map(|residual| residual.evaluate(bindings))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DVector::from_vec(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equation::{EquationSystem, parse_equation};

    #[test]
    fn test_linear_jacobian() {
        let system = EquationSystem::parse(&["x + y = 3", "x - 2y = 0"]).unwrap();
        let jacobian = JacobianMatrix::build(system.residuals(), system.variables());
        assert_eq!((jacobian.rows(), jacobian.cols()), (2, 2));
        assert!(jacobian.is_square());
        assert_eq!(jacobian.entry(1, 1), Some(&Expr::number(-2.0)));
        assert_eq!(jacobian.entry(2, 0), None);

        let m = jacobian.evaluate(&[('x', 0.0), ('y', 0.0)]).unwrap();
        assert_eq!(m, DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, -2.0]));
    }

    #[test]
    fn test_nonlinear_jacobian_and_residuals() {
        let system = EquationSystem::parse(&["x^2 + y = 3", "x * y = 2"]).unwrap();
        let jacobian = JacobianMatrix::build(system.residuals(), system.variables());
        let residuals = ResidualVector::new(system.residuals().to_vec());
        let bindings = [('x', 1.0), ('y', 2.0)];

        let m = jacobian.evaluate(&bindings).unwrap();
        assert_eq!(m[(0, 0)], 2.0);
        assert_eq!(m[(0, 1)], 1.0);
        assert_eq!(m[(1, 0)], 2.0);
        assert_eq!(m[(1, 1)], 1.0);

        let f = residuals.evaluate(&bindings).unwrap();
        assert_eq!(f, DVector::from_vec(vec![0.0, 0.0]));
    }

    #[test]
    fn test_non_square_shape() {
        let residuals = [parse_equation("x + y = 1").unwrap()];
        let jacobian = JacobianMatrix::build(&residuals, &['x', 'y', 'z']);
        assert_eq!((jacobian.rows(), jacobian.cols()), (1, 3));
        assert!(!jacobian.is_square());
        assert_eq!(jacobian.entry(0, 2), Some(&Expr::number(0.0)));
        assert_eq!(jacobian.entry(1, 0), None);

        let m = jacobian.evaluate(&[('x', 0.0), ('y', 0.0), ('z', 0.0)]).unwrap();
        assert_eq!(m.shape(), (1, 3));
        assert_eq!(m, DMatrix::from_row_slice(1, 3, &[1.0, 1.0, 0.0]));

        let tall = JacobianMatrix::build(&[residuals[0].clone(), residuals[0].clone()], &['x']);
        let m = tall.evaluate(&[('x', 2.0), ('y', 5.0)]).unwrap();
        assert_eq!(m, DMatrix::from_row_slice(2, 1, &[1.0, 1.0]));
    }

    #[test]
    fn test_unbound_variable() {
        let residuals = ResidualVector::new(vec![Expr::variable('z')]);
        assert_eq!(
            residuals.evaluate(&[('x', 1.0)]),
            Err(SolveError::UnboundVariable('z'))
        );
    }
}
