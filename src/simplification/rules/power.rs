use crate::ast::{BinaryOp, Expr};
use crate::simplification::reduce_node;

/// `x^0 = 1`, `x^1 = x`, `0^k = 0` for `k > 0`, `1^k = 1`, and
/// `(b^m)^n = b^(m*n)` for numeric `m` and integer `n`
pub(crate) fn reduce_pow(base: &Expr, exponent: &Expr) -> Option<Expr> {
    match exponent.as_number() {
        Some(e) if e == 0.0 => return Some(Expr::number(1.0)),
        Some(e) if e == 1.0 => return Some(base.clone()),
        Some(e) if e > 0.0 && base.is_number(0.0) => return Some(Expr::number(0.0)),
        _ => {}
    }

    if base.is_number(1.0) {
        return Some(Expr::number(1.0));
    }

    let n = exponent.as_number().filter(|n| n.fract() == 0.0)?;
    match base.as_binary() {
        Some((BinaryOp::Pow, inner, m)) => {
            let m = m.as_number()?;
            Some(reduce_node(Expr::binary(
                BinaryOp::Pow,
                inner.clone(),
                Expr::number(m * n),
            )))
        }
        _ => None,
    }
}
