//! Numeric evaluation of expression trees against variable bindings

use crate::ast::Expr;
use crate::error::SolveError;

impl Expr {
    /// Evaluate the expression with the given `(variable, value)` bindings
    ///
    /// Every variable in the tree must be bound; a missing binding is
    /// reported as [`SolveError::UnboundVariable`] and never defaulted.
    ///
    /// # Example
    /// ```
    /// use symb_solve::parse;
    /// let expr = parse("x^2 + y").unwrap();
    /// assert_eq!(expr.evaluate(&[('x', 3.0), ('y', 1.0)]), Ok(10.0));
    /// ```
    pub fn evaluate(&self, bindings: &[(char, f64)]) -> Result<f64, SolveError> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Variable(c) => lookup(bindings, *c),
            Expr::ConstantE => Ok(std::f64::consts::E),
            Expr::ConstantPi => Ok(std::f64::consts::PI),
            Expr::Factorial(f) => Ok(f.value()),
            Expr::Binary { op, left, right } => {
                let l = left.evaluate(bindings)?;
                let r = right.evaluate(bindings)?;
                Ok(op.apply(l, r))
            }
            Expr::Unary { op, value } => Ok(op.apply(value.evaluate(bindings)?)),
        }
    }
}

fn lookup(bindings: &[(char, f64)], var: char) -> Result<f64, SolveError> {
    bindings
        .iter()
        .find(|(name, _)| *name == var)
        .map(|(_, value)| *value)
        .ok_or(SolveError::UnboundVariable(var))
}
