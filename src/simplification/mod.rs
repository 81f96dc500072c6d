//! Reduction framework - rewrites expressions into smaller canonical forms
//!
//! Every binary or unary node goes through [`reduce_node`] as soon as it is
//! built, so the rest of the crate never holds an unreduced composite.
//! [`reduce`] additionally walks a whole tree bottom-up until it stops
//! changing.
pub(crate) mod engine;
pub(crate) mod helpers;
mod rules;

use crate::ast::{BinaryOp, Expr};

/// Reduce an expression tree to its canonical form
///
/// # Example
/// ```
/// use symb_solve::{Expr, reduce};
/// let x = Expr::variable('x');
/// let expr = x.clone() * x.clone() / x;
/// assert_eq!(reduce(expr), Expr::variable('x'));
/// ```
pub fn reduce(expr: Expr) -> Expr {
    engine::Reducer::new().reduce(expr)
}

/// Apply the rule set of a single node, assuming its children are reduced
pub(crate) fn reduce_node(expr: Expr) -> Expr {
    let reduced = match &expr {
        Expr::Binary { op, left, right } => {
            rules::numeric::fold_numbers(*op, left, right).or_else(|| match op {
                BinaryOp::Sum => rules::additive::reduce_sum(left, right),
                BinaryOp::Subtraction => rules::additive::reduce_subtraction(left, right),
                BinaryOp::Multiply => rules::multiply_division::reduce_multiply(left, right),
                BinaryOp::Division => rules::multiply_division::reduce_division(left, right),
                BinaryOp::Pow => rules::power::reduce_pow(left, right),
            })
        }
        Expr::Unary { op, value } => rules::trigonometric::reduce_sin_cos(*op, value)
            .or_else(|| rules::numeric::fold_unary(*op, value)),
        _ => None,
    };
    reduced.unwrap_or(expr)
}
