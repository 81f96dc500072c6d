use num_traits::ToPrimitive;

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::simplification::helpers::{clean_number, numbers};

/// Special angles of sine and cosine: `0`, `π`, and `k·π` for integer or
/// half-integer `k`
pub(crate) fn reduce_sin_cos(op: UnaryOp, arg: &Expr) -> Option<Expr> {
    let sin = match op {
        UnaryOp::Sin => true,
        UnaryOp::Cos => false,
        _ => return None,
    };

    if arg.is_number(0.0) {
        return Some(Expr::number(if sin { 0.0 } else { 1.0 }));
    }
    if matches!(arg, Expr::ConstantPi) {
        return Some(Expr::number(if sin { 0.0 } else { -1.0 }));
    }

    let Some((BinaryOp::Multiply, left, right)) = arg.as_binary() else {
        return None;
    };
    let index = if matches!(right, Expr::ConstantPi) {
        left
    } else if matches!(left, Expr::ConstantPi) {
        right
    } else {
        return None;
    };
    let k = match index {
        Expr::Number(k) => *k,
        other => numbers(other)?,
    };
    determinate(k, sin)
}

/// Value of `sin(kπ)` / `cos(kπ)` when `k` is an integer or half-integer
fn determinate(k: f64, sin: bool) -> Option<Expr> {
    let whole = k.trunc();

    if k == whole {
        if sin {
            return Some(Expr::number(0.0));
        }
        let even = whole.to_i64()? % 2 == 0;
        return Some(Expr::number(if even { 1.0 } else { -1.0 }));
    }

    if (k - whole).abs() == 0.5 {
        let shifted = if k >= 0.0 { k - 0.5 } else { k + 0.5 };
        let result = determinate(shifted, !sin)?.as_number()?;
        return Some(clean_number(if k >= 0.0 { result } else { -result }));
    }

    None
}
