use crate::ast::{BinaryOp, Expr};
use crate::simplification::reduce_node;

/// `0 + x`, `x + 0`, `x + x`, and `x + (-n)` for a negative literal
pub(crate) fn reduce_sum(left: &Expr, right: &Expr) -> Option<Expr> {
    if left.is_number(0.0) {
        return Some(right.clone());
    }
    if right.is_number(0.0) {
        return Some(left.clone());
    }
    if left == right {
        return Some(reduce_node(Expr::binary(
            BinaryOp::Multiply,
            Expr::number(2.0),
            left.clone(),
        )));
    }
    match right.as_number() {
        Some(n) if n < 0.0 => Some(Expr::binary(
            BinaryOp::Subtraction,
            left.clone(),
            Expr::number(-n),
        )),
        _ => None,
    }
}

/// `x - 0`, `x - x`, `0 - x`, and `x - (-n)` for a negative literal
pub(crate) fn reduce_subtraction(left: &Expr, right: &Expr) -> Option<Expr> {
    if right.is_number(0.0) {
        return Some(left.clone());
    }
    if left == right {
        return Some(Expr::number(0.0));
    }
    if left.is_number(0.0) {
        return Some(reduce_node(Expr::binary(
            BinaryOp::Multiply,
            Expr::number(-1.0),
            right.clone(),
        )));
    }
    match right.as_number() {
        Some(n) if n < 0.0 => Some(Expr::binary(BinaryOp::Sum, left.clone(), Expr::number(-n))),
        _ => None,
    }
}
