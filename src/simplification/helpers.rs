// Shared helpers for the reduction rules
use crate::ast::{BinaryOp, Expr};

/// Split a node into `(base, exponent)`, scaling by `ind`.
///
/// `Pow(b, Number(e))` yields `(b, e * ind)`; anything else `(expr, ind)`.
pub(crate) fn pow_ind(expr: &Expr, ind: f64) -> (&Expr, f64) {
    match expr.as_binary() {
        Some((BinaryOp::Pow, base, exponent)) => match exponent.as_number() {
            Some(e) => (base, e * ind),
            None => (expr, ind),
        },
        _ => (expr, ind),
    }
}

/// Rebuild `base^exponent` through the power rules, so exponent 1 gives
/// the base back and exponent 0 gives `1`
pub(crate) fn determinate_pow(base: &Expr, exponent: f64) -> Expr {
    super::reduce_node(Expr::binary(
        BinaryOp::Pow,
        base.clone(),
        Expr::number(exponent),
    ))
}

/// Value of a binary node whose two children are plain numbers
pub(crate) fn numbers(expr: &Expr) -> Option<f64> {
    match expr {
        Expr::Binary { op, left, right } => match (left.as_ref(), right.as_ref()) {
            (Expr::Number(l), Expr::Number(r)) => Some(op.apply(*l, *r)),
            _ => None,
        },
        _ => None,
    }
}

/// Number leaf with negative zero normalized away
pub(crate) fn clean_number(n: f64) -> Expr {
    Expr::number(if n == 0.0 { 0.0 } else { n })
}
