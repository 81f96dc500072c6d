//! Dense linear solve `A x = b` used for the Newton step

use nalgebra::{DMatrix, DVector};

/// A dense direct solver for square systems
///
/// Returns `None` when the matrix is singular. A returned vector may still
/// contain non-finite entries for ill-conditioned systems; the Newton loop
/// checks for that itself.
pub trait LinearSolve {
    fn solve(&self, a: &DMatrix<f64>, b: &DVector<f64>) -> Option<DVector<f64>>;
}

/// LU decomposition with partial pivoting
#[derive(Debug, Clone, Copy, Default)]
pub struct LuSolver;

impl LinearSolve for LuSolver {
    fn solve(&self, a: &DMatrix<f64>, b: &DVector<f64>) -> Option<DVector<f64>> {
        a.clone().lu().solve(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_system() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, -1.0]);
        let b = DVector::from_vec(vec![3.0, 1.0]);
        let x = LuSolver.solve(&a, &b).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-12);
        assert!((x[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_singular_system() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 2.0, 2.0]);
        let b = DVector::from_vec(vec![1.0, 2.0]);
        assert_eq!(LuSolver.solve(&a, &b), None);
    }

    #[test]
    fn test_zero_scalar() {
        let a = DMatrix::from_element(1, 1, 0.0);
        let b = DVector::from_element(1, 1.0);
        assert_eq!(LuSolver.solve(&a, &b), None);
    }
}
