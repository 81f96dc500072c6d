// Differentiation engine - applies calculus rules
//
// Every intermediate node is built through the reducing combinators, so
// trivial terms such as `0 * u` or `u' * 1` vanish as the derivative is
// assembled. The finished tree gets one full reduction pass on top.

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::simplification::reduce;

impl Expr {
    /// Differentiate this expression with respect to `var`
    ///
    /// # Example
    /// ```
    /// use symb_solve::parse;
    /// let expr = parse("x^2").unwrap();
    /// assert_eq!(expr.derivative('x').to_string(), "2 * x");
    /// ```
    pub fn derivative(&self, var: char) -> Expr {
        reduce(self.derive(var))
    }

    fn derive(&self, var: char) -> Expr {
        match self {
            // Base cases
            Expr::Number(_) | Expr::ConstantE | Expr::ConstantPi | Expr::Factorial(_) => {
                Expr::number(0.0)
            }
            Expr::Variable(c) => Expr::number(if *c == var { 1.0 } else { 0.0 }),

            Expr::Binary { op, left, right } => {
                let u = left.as_ref();
                let v = right.as_ref();
                match op {
                    // (u + v)' = u' + v'
                    BinaryOp::Sum => u.derive(var) + v.derive(var),

                    // (u - v)' = u' - v'
                    BinaryOp::Subtraction => u.derive(var) - v.derive(var),

                    // (u * v)' = u' * v + u * v'
                    BinaryOp::Multiply => u.derive(var) * v + u * v.derive(var),

                    // (u / v)' = (u' * v - u * v') / v^2
                    BinaryOp::Division => {
                        let numerator = u.derive(var) * v - u * v.derive(var);
                        numerator / v.clone().pow(2.0)
                    }

                    BinaryOp::Pow => derive_pow(u, v, var),
                }
            }

            Expr::Unary { op, value } => {
                let u = value.as_ref();
                let u_prime = u.derive(var);
                if u_prime.is_number(0.0) {
                    return Expr::number(0.0);
                }
                derive_unary(*op, u) * u_prime
            }
        }
    }
}

/// Power rule, with logarithmic differentiation for exponents that depend
/// on `var`
fn derive_pow(u: &Expr, v: &Expr, var: char) -> Expr {
    let u_prime = u.derive(var);

    if !v.contains_var(var) {
        // (u^n)' = n * u^(n-1) * u'
        if u_prime.is_number(0.0) {
            return Expr::number(0.0);
        }
        let n_minus_1 = match v.as_number() {
            Some(n) => Expr::number(n - 1.0),
            None => v - Expr::number(1.0),
        };
        return v * u.clone().pow(n_minus_1) * u_prime;
    }

    // (u^v)' = u^v * (v' * ln(u) + v * u' / u)
    let v_prime = v.derive(var);
    let log_term = v_prime * Expr::apply(UnaryOp::Ln, u.clone());
    let base_term = v * u_prime / u;
    Expr::combine(BinaryOp::Pow, u.clone(), v.clone()) * (log_term + base_term)
}

/// d/du f(u) for a unary function, without the chain factor u'
fn derive_unary(op: UnaryOp, u: &Expr) -> Expr {
    let one = || Expr::number(1.0);
    let neg_one = || Expr::number(-1.0);
    let u_squared = || u.clone().pow(2.0);
    let f = |op: UnaryOp| Expr::apply(op, u.clone());

    match op {
        // sin' = cos
        UnaryOp::Sin => f(UnaryOp::Cos),
        // cos' = -sin
        UnaryOp::Cos => neg_one() * f(UnaryOp::Sin),
        // tan' = 1 / cos^2
        UnaryOp::Tan => one() / f(UnaryOp::Cos).pow(2.0),
        // cot' = -1 / sin^2
        UnaryOp::Cot => neg_one() / f(UnaryOp::Sin).pow(2.0),
        // sec' = sec * tan
        UnaryOp::Sec => f(UnaryOp::Sec) * f(UnaryOp::Tan),
        // csc' = -csc * cot
        UnaryOp::Csc => neg_one() * f(UnaryOp::Csc) * f(UnaryOp::Cot),
        // arcsin' = 1 / sqrt(1 - u^2)
        UnaryOp::Arcsin => one() / (one() - u_squared()).pow(0.5),
        // arccos' = -1 / sqrt(1 - u^2)
        UnaryOp::Arccos => neg_one() / (one() - u_squared()).pow(0.5),
        // arctan' = 1 / (1 + u^2)
        UnaryOp::Arctan => one() / (one() + u_squared()),
        // arccot' = -1 / (1 + u^2)
        UnaryOp::Arccot => neg_one() / (one() + u_squared()),
        // ln' = 1 / u
        UnaryOp::Ln => one() / u,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Expr {
        Expr::variable('x')
    }

    #[test]
    fn test_leaves() {
        assert_eq!(Expr::number(5.0).derivative('x'), Expr::number(0.0));
        assert_eq!(Expr::ConstantPi.derivative('x'), Expr::number(0.0));
        assert_eq!(Expr::factorial(3).derivative('x'), Expr::number(0.0));
        assert_eq!(x().derivative('x'), Expr::number(1.0));
        assert_eq!(x().derivative('y'), Expr::number(0.0));
    }

    #[test]
    fn test_power_rule() {
        let square = Expr::binary(BinaryOp::Pow, x(), Expr::number(2.0));
        assert_eq!(
            square.derivative('x'),
            Expr::binary(BinaryOp::Multiply, Expr::number(2.0), x())
        );
    }

    #[test]
    fn test_linear_terms() {
        // d/dx (3 * x - y) = 3
        let expr = Expr::binary(
            BinaryOp::Subtraction,
            Expr::binary(BinaryOp::Multiply, Expr::number(3.0), x()),
            Expr::variable('y'),
        );
        assert_eq!(expr.derivative('x'), Expr::number(3.0));
        assert_eq!(expr.derivative('y'), Expr::number(-1.0));
    }

    #[test]
    fn test_sin_derivative() {
        let expr = Expr::unary(UnaryOp::Sin, x());
        assert_eq!(expr.derivative('x'), Expr::unary(UnaryOp::Cos, x()));
    }

    #[test]
    fn test_unary_chain_rules_match_finite_differences() {
        let ops = [
            UnaryOp::Sin,
            UnaryOp::Cos,
            UnaryOp::Tan,
            UnaryOp::Cot,
            UnaryOp::Sec,
            UnaryOp::Csc,
            UnaryOp::Arcsin,
            UnaryOp::Arccos,
            UnaryOp::Arctan,
            UnaryOp::Arccot,
            UnaryOp::Ln,
        ];
        // Argument 0.5 * x keeps arcsin/arccos inside their domain
        let inner = Expr::binary(BinaryOp::Multiply, Expr::number(0.5), x());
        let h = 1e-6;
        for op in ops {
            let expr = Expr::unary(op, inner.clone());
            let derivative = expr.derivative('x');
            for point in [0.3, 0.7, 1.1] {
                let at = |p: f64| expr.evaluate(&[('x', p)]).unwrap();
                let numeric = (at(point + h) - at(point - h)) / (2.0 * h);
                let symbolic = derivative.evaluate(&[('x', point)]).unwrap();
                assert!(
                    (numeric - symbolic).abs() < 1e-4,
                    "{}: numeric {} vs symbolic {} at {}",
                    op.name(),
                    numeric,
                    symbolic,
                    point
                );
            }
        }
    }

    #[test]
    fn test_variable_exponent() {
        // d/dx x^x = x^x * (ln(x) + 1)
        let expr = Expr::binary(BinaryOp::Pow, x(), x());
        let derivative = expr.derivative('x');
        let at = 1.7_f64;
        let expected = at.powf(at) * (at.ln() + 1.0);
        let value = derivative.evaluate(&[('x', at)]).unwrap();
        assert!((value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_quotient_rule() {
        // d/dx (1 / x) = -1 / x^2
        let expr = Expr::binary(BinaryOp::Division, Expr::number(1.0), x());
        let value = expr.derivative('x').evaluate(&[('x', 2.0)]).unwrap();
        assert!((value + 0.25).abs() < 1e-12);
    }
}
