//! Abstract Syntax Tree for equation expressions

use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashSet;

/// Binary operators of the expression tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Sum,
    Subtraction,
    Multiply,
    Division,
    Pow,
}

impl BinaryOp {
    /// Rendering priority of a node built with this operator
    pub fn priority(self) -> u8 {
        match self {
            BinaryOp::Sum | BinaryOp::Subtraction => 1,
            BinaryOp::Multiply | BinaryOp::Division => 2,
            BinaryOp::Pow => 3,
        }
    }

    /// Apply the operator to two numeric operands
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOp::Sum => left + right,
            BinaryOp::Subtraction => left - right,
            BinaryOp::Multiply => left * right,
            BinaryOp::Division => left / right,
            BinaryOp::Pow => left.powf(right),
        }
    }
}

/// Unary functions of the expression tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
    Arcsin,
    Arccos,
    Arctan,
    Arccot,
    Ln,
}

impl UnaryOp {
    /// Canonical function name used for rendering
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Tan => "tan",
            UnaryOp::Cot => "cot",
            UnaryOp::Sec => "sec",
            UnaryOp::Csc => "csc",
            UnaryOp::Arcsin => "arcsin",
            UnaryOp::Arccos => "arccos",
            UnaryOp::Arctan => "arctan",
            UnaryOp::Arccot => "arccot",
            UnaryOp::Ln => "ln",
        }
    }

    /// Apply the function to a numeric argument
    pub fn apply(self, x: f64) -> f64 {
        match self {
            UnaryOp::Sin => x.sin(),
            UnaryOp::Cos => x.cos(),
            UnaryOp::Tan => x.tan(),
            UnaryOp::Cot => 1.0 / x.tan(),
            UnaryOp::Sec => 1.0 / x.cos(),
            UnaryOp::Csc => 1.0 / x.sin(),
            UnaryOp::Arcsin => x.asin(),
            UnaryOp::Arccos => x.acos(),
            UnaryOp::Arctan => x.atan(),
            UnaryOp::Arccot => std::f64::consts::FRAC_PI_2 - x.atan(),
            UnaryOp::Ln => x.ln(),
        }
    }
}

/// Factorial leaf `n!`
///
/// The value is computed on first use and cached; the cell is write-once.
#[derive(Debug, Clone)]
pub struct Factorial {
    n: i32,
    value: OnceLock<f64>,
}

impl Factorial {
    pub fn new(n: i32) -> Self {
        Factorial {
            n,
            value: OnceLock::new(),
        }
    }

    /// The integer operand
    pub fn n(&self) -> i32 {
        self.n
    }

    /// `n!` as a double (`1` for `n <= 1`, `inf` once it overflows)
    pub fn value(&self) -> f64 {
        *self.value.get_or_init(|| (2..=self.n).map(f64::from).product())
    }

    #[cfg(test)]
    pub(crate) fn is_cached(&self) -> bool {
        self.value.get().is_some()
    }
}

impl PartialEq for Factorial {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Constant number (e.g., 3.14, 1e10)
    Number(f64),

    /// Single-letter variable bound at evaluation time
    Variable(char),

    /// Euler's number
    ConstantE,

    /// π
    ConstantPi,

    /// `n!`
    Factorial(Factorial),

    /// Binary operation; owns both children
    Binary {
        op: BinaryOp,
        left: Arc<Expr>,
        right: Arc<Expr>,
    },

    /// Unary function application; owns its argument
    Unary { op: UnaryOp, value: Arc<Expr> },
}

impl Expr {
    // Leaf constructors

    /// Create a number expression
    pub fn number(n: f64) -> Self {
        Expr::Number(n)
    }

    /// Create a variable expression
    pub fn variable(symbol: char) -> Self {
        Expr::Variable(symbol)
    }

    /// Create a factorial leaf
    pub fn factorial(n: i32) -> Self {
        Expr::Factorial(Factorial::new(n))
    }

    // Raw node constructors. These skip reduction and are only used by the
    // reduction engine itself and by tests that need an unreduced shape.

    pub(crate) fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Arc::new(left),
            right: Arc::new(right),
        }
    }

    pub(crate) fn unary(op: UnaryOp, value: Expr) -> Self {
        Expr::Unary {
            op,
            value: Arc::new(value),
        }
    }

    // Accessor methods

    /// Check if expression is a constant number and return its value
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expr::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if this expression is exactly the number `n`
    #[inline]
    pub fn is_number(&self, n: f64) -> bool {
        matches!(self, Expr::Number(v) if *v == n)
    }

    /// Borrow the operator and children of a binary node
    pub fn as_binary(&self) -> Option<(BinaryOp, &Expr, &Expr)> {
        match self {
            Expr::Binary { op, left, right } => Some((*op, left, right)),
            _ => None,
        }
    }

    /// Rendering priority; higher binds tighter
    pub fn priority(&self) -> u8 {
        match self {
            Expr::Number(_)
            | Expr::Variable(_)
            | Expr::ConstantE
            | Expr::ConstantPi
            | Expr::Unary { .. } => 6,
            Expr::Factorial(_) => 5,
            Expr::Binary { op, .. } => op.priority(),
        }
    }

    // Analysis methods

    /// Count the total number of nodes in the tree
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Expr::Unary { value, .. } => 1 + value.node_count(),
            _ => 1,
        }
    }

    /// Check if the expression contains a specific variable
    pub fn contains_var(&self, var: char) -> bool {
        match self {
            Expr::Variable(c) => *c == var,
            Expr::Binary { left, right, .. } => left.contains_var(var) || right.contains_var(var),
            Expr::Unary { value, .. } => value.contains_var(var),
            _ => false,
        }
    }

    /// Collect all distinct variables in the expression
    pub fn variables_of(&self) -> FxHashSet<char> {
        let mut vars = FxHashSet::default();
        self.fold((), |(), node| {
            if let Expr::Variable(c) = node {
                vars.insert(*c);
            }
        });
        vars
    }

    /// Variables in order of first appearance (left-to-right, parents first)
    pub fn variables_in_order(&self) -> Vec<char> {
        let mut order = Vec::new();
        self.push_variables(&mut order);
        order
    }

    pub(crate) fn push_variables(&self, order: &mut Vec<char>) {
        match self {
            Expr::Variable(c) => {
                if !order.contains(c) {
                    order.push(*c);
                }
            }
            Expr::Binary { left, right, .. } => {
                left.push_variables(order);
                right.push_variables(order);
            }
            Expr::Unary { value, .. } => value.push_variables(order),
            _ => {}
        }
    }

    /// Whether the expression is a polynomial in the solver's sense.
    ///
    /// Numbers and variables are polynomial; `+ - *` of polynomials are
    /// polynomial; `/` needs a numeric divisor and `^` an integer exponent.
    pub fn is_polynomial(&self) -> bool {
        match self {
            Expr::Number(_) | Expr::Variable(_) => true,
            Expr::Binary { op, left, right } => match op {
                BinaryOp::Division => right.as_number().is_some() && left.is_polynomial(),
                BinaryOp::Pow => {
                    right.as_number().is_some_and(|n| n.fract() == 0.0) && left.is_polynomial()
                }
                BinaryOp::Sum | BinaryOp::Subtraction | BinaryOp::Multiply => {
                    left.is_polynomial() && right.is_polynomial()
                }
            },
            _ => false,
        }
    }

    /// Fold over the expression tree in pre-order (parent before children)
    pub fn fold<T, F>(&self, init: T, mut f: F) -> T
    where
        F: FnMut(T, &Expr) -> T,
    {
        self.fold_inner(init, &mut f)
    }

    fn fold_inner<T, F>(&self, init: T, f: &mut F) -> T
    where
        F: FnMut(T, &Expr) -> T,
    {
        let acc = f(init, self);
        match self {
            Expr::Binary { left, right, .. } => {
                let acc = left.fold_inner(acc, f);
                right.fold_inner(acc, f)
            }
            Expr::Unary { value, .. } => value.fold_inner(acc, f),
            _ => acc,
        }
    }

    /// Substitute a variable with another expression, reducing on the way up
    ///
    /// # Example
    /// ```
    /// use symb_solve::{Expr, parse};
    /// let expr = parse("x * y").unwrap();
    /// let result = expr.substitute('x', &Expr::number(3.0));
    /// assert_eq!(result.to_string(), "3 * y");
    /// ```
    pub fn substitute(&self, var: char, replacement: &Expr) -> Expr {
        match self {
            Expr::Variable(c) if *c == var => replacement.clone(),
            Expr::Binary { op, left, right } => Expr::combine(
                *op,
                left.substitute(var, replacement),
                right.substitute(var, replacement),
            ),
            Expr::Unary { op, value } => Expr::apply(*op, value.substitute(var, replacement)),
            _ => self.clone(),
        }
    }
}

// Manual Hash implementation; f64 payloads hash by bit pattern
impl std::hash::Hash for Expr {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Expr::Number(n) => n.to_bits().hash(state),
            Expr::Variable(c) => c.hash(state),
            Expr::ConstantE | Expr::ConstantPi => {}
            Expr::Factorial(f) => f.n.hash(state),
            Expr::Binary { op, left, right } => {
                op.hash(state);
                left.hash(state);
                right.hash(state);
            }
            Expr::Unary { op, value } => {
                op.hash(state);
                value.hash(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = Expr::binary(BinaryOp::Sum, Expr::variable('x'), Expr::number(1.0));
        let b = Expr::binary(BinaryOp::Sum, Expr::variable('x'), Expr::number(1.0));
        let c = Expr::binary(BinaryOp::Sum, Expr::number(1.0), Expr::variable('x'));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(Expr::ConstantE, Expr::ConstantPi);
        assert_eq!(Expr::factorial(4), Expr::factorial(4));
    }

    #[test]
    fn test_factorial_is_computed_once() {
        let f = Factorial::new(5);
        assert!(!f.is_cached());
        assert_eq!(f.value(), 120.0);
        assert!(f.is_cached());
        assert_eq!(f.value(), 120.0);
        assert_eq!(Factorial::new(0).value(), 1.0);
    }

    #[test]
    fn test_node_count() {
        let x = Expr::variable('x');
        assert_eq!(x.node_count(), 1);

        let complex = Expr::binary(
            BinaryOp::Multiply,
            Expr::binary(BinaryOp::Sum, Expr::variable('x'), Expr::number(1.0)),
            Expr::unary(UnaryOp::Sin, Expr::variable('y')),
        );
        assert_eq!(complex.node_count(), 6);
    }

    #[test]
    fn test_variables() {
        let expr = Expr::binary(
            BinaryOp::Sum,
            Expr::binary(BinaryOp::Multiply, Expr::variable('y'), Expr::variable('x')),
            Expr::unary(UnaryOp::Cos, Expr::variable('y')),
        );
        let vars = expr.variables_of();
        assert_eq!(vars.len(), 2);
        assert!(vars.contains(&'x') && vars.contains(&'y'));
        assert_eq!(expr.variables_in_order(), vec!['y', 'x']);
        assert!(expr.contains_var('x'));
        assert!(!expr.contains_var('z'));
    }

    #[test]
    fn test_is_polynomial() {
        let x = || Expr::variable('x');
        let square = Expr::binary(BinaryOp::Pow, x(), Expr::number(2.0));
        assert!(square.is_polynomial());
        assert!(Expr::binary(BinaryOp::Subtraction, square.clone(), Expr::number(4.0)).is_polynomial());
        assert!(Expr::binary(BinaryOp::Division, square.clone(), Expr::number(2.0)).is_polynomial());

        assert!(!Expr::binary(BinaryOp::Pow, x(), Expr::number(0.5)).is_polynomial());
        assert!(!Expr::binary(BinaryOp::Division, Expr::number(1.0), x()).is_polynomial());
        assert!(!Expr::unary(UnaryOp::Sin, x()).is_polynomial());
        assert!(!Expr::ConstantPi.is_polynomial());
    }
}
