use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::simplification::helpers::clean_number;

/// Fold a binary node whose children are both numbers.
///
/// Only finite results are folded; `1/0` stays a division.
pub(crate) fn fold_numbers(op: BinaryOp, left: &Expr, right: &Expr) -> Option<Expr> {
    let (Expr::Number(l), Expr::Number(r)) = (left, right) else {
        return None;
    };
    let value = op.apply(*l, *r);
    value.is_finite().then(|| clean_number(value))
}

/// Fold a unary function applied to a number, plus `ln(e) = 1`
pub(crate) fn fold_unary(op: UnaryOp, value: &Expr) -> Option<Expr> {
    match value {
        Expr::Number(x) => {
            let result = op.apply(*x);
            result.is_finite().then(|| clean_number(result))
        }
        Expr::ConstantE if op == UnaryOp::Ln => Some(Expr::number(1.0)),
        _ => None,
    }
}
