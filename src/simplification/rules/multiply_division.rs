//! Multiply/divide reduction
//!
//! Both operands are viewed as `base^exponent`. The new operand is tried
//! against every factor of a nested product or quotient on either side;
//! equal bases merge their exponents (added under `*`, subtracted under
//! `/`). Plain numbers fold together. When nothing merges the node is
//! kept as built.
//!
//! Calls below read as `combine_*(left, right, ind_left, ind_right)`,
//! meaning `left^ind_left (*|/) right^ind_right`.
//!
//! The search is exhaustive: a product of two left-deep chains with no
//! common factor tries every pairing along both spines, so the cost grows
//! roughly fourfold per extra factor on each side. Up to about ten factors
//! per side stays well under a second; the `reduce_long_products_*`
//! benches track this.

use crate::ast::{BinaryOp, Expr};
use crate::simplification::helpers::{clean_number, determinate_pow, pow_ind};

pub(crate) fn reduce_multiply(left: &Expr, right: &Expr) -> Option<Expr> {
    multiply_simple(left, right).or_else(|| combine_multiply(left, right, 1.0, 1.0))
}

pub(crate) fn reduce_division(left: &Expr, right: &Expr) -> Option<Expr> {
    division_simple(left, right).or_else(|| combine_division(left, right, 1.0, 1.0))
}

fn multiply_simple(left: &Expr, right: &Expr) -> Option<Expr> {
    if left.is_number(0.0) || right.is_number(0.0) {
        return Some(Expr::number(0.0));
    }
    if left.is_number(1.0) {
        return Some(right.clone());
    }
    if right.is_number(1.0) {
        return Some(left.clone());
    }
    None
}

fn division_simple(left: &Expr, right: &Expr) -> Option<Expr> {
    if left.is_number(0.0) {
        return Some(Expr::number(0.0));
    }
    if right.is_number(1.0) {
        return Some(left.clone());
    }
    None
}

/// Retry a product after one side has been merged, falling back to the
/// plain `left^ind_left * right^ind_right` node
fn multiply_check(left: &Expr, right: &Expr, ind_left: f64, ind_right: f64) -> Expr {
    if let Some(merged) = combine_multiply(left, right, ind_left, ind_right) {
        return merged;
    }
    let left = determinate_pow(left, ind_left);
    let right = determinate_pow(right, ind_right);
    multiply_simple(&left, &right).unwrap_or_else(|| Expr::binary(BinaryOp::Multiply, left, right))
}

/// Quotient counterpart of [`multiply_check`]
fn division_check(left: &Expr, right: &Expr, ind_left: f64, ind_right: f64) -> Expr {
    if let Some(merged) = combine_division(left, right, ind_left, ind_right) {
        return merged;
    }
    let left = determinate_pow(left, ind_left);
    let right = determinate_pow(right, ind_right);
    division_simple(&left, &right).unwrap_or_else(|| Expr::binary(BinaryOp::Division, left, right))
}

fn combine_multiply(left: &Expr, right: &Expr, ind_left: f64, ind_right: f64) -> Option<Expr> {
    let (left, ind_left) = pow_ind(left, ind_left);
    let (right, ind_right) = pow_ind(right, ind_right);

    if let Some((BinaryOp::Multiply, ll, lr)) = left.as_binary() {
        if let Some(merged) = combine_multiply(ll, right, ind_left, ind_right) {
            return Some(multiply_check(lr, &merged, ind_left, 1.0));
        }
        if let Some(merged) = combine_multiply(lr, right, ind_left, ind_right) {
            return Some(multiply_check(ll, &merged, ind_left, 1.0));
        }
    }

    if let Some((BinaryOp::Multiply, rl, rr)) = right.as_binary() {
        if let Some(merged) = combine_multiply(left, rl, ind_left, ind_right) {
            return Some(multiply_check(&merged, rr, 1.0, ind_right));
        }
        if let Some(merged) = combine_multiply(left, rr, ind_left, ind_right) {
            return Some(multiply_check(&merged, rl, 1.0, ind_right));
        }
    }

    if let Some((BinaryOp::Division, ll, lr)) = left.as_binary() {
        if let Some(merged) = combine_multiply(ll, right, ind_left, ind_right) {
            return Some(division_check(&merged, lr, 1.0, ind_left));
        }
        if let Some(merged) = combine_division(right, lr, ind_right, ind_left) {
            return Some(multiply_check(ll, &merged, ind_left, 1.0));
        }
    }

    if let Some((BinaryOp::Division, rl, rr)) = right.as_binary() {
        if let Some(merged) = combine_multiply(left, rl, ind_left, ind_right) {
            return Some(division_check(&merged, rr, 1.0, ind_right));
        }
        if let Some(merged) = combine_division(left, rr, ind_left, ind_right) {
            return Some(multiply_check(&merged, rl, 1.0, ind_right));
        }
    }

    if left == right {
        return Some(determinate_pow(left, ind_left + ind_right));
    }

    fold_powers(left, right, ind_left, ind_right, |l, r| l * r)
}

fn combine_division(left: &Expr, right: &Expr, ind_left: f64, ind_right: f64) -> Option<Expr> {
    let (left, ind_left) = pow_ind(left, ind_left);
    let (right, ind_right) = pow_ind(right, ind_right);

    if let Some((BinaryOp::Multiply, ll, lr)) = left.as_binary() {
        if let Some(merged) = combine_division(ll, right, ind_left, ind_right) {
            return Some(multiply_check(lr, &merged, ind_left, 1.0));
        }
        if let Some(merged) = combine_division(lr, right, ind_left, ind_right) {
            return Some(multiply_check(ll, &merged, ind_left, 1.0));
        }
    }

    if let Some((BinaryOp::Multiply, rl, rr)) = right.as_binary() {
        if let Some(merged) = combine_division(left, rl, ind_left, ind_right) {
            return Some(division_check(&merged, rr, 1.0, ind_right));
        }
        if let Some(merged) = combine_division(left, rr, ind_left, ind_right) {
            return Some(division_check(&merged, rl, 1.0, ind_right));
        }
    }

    if let Some((BinaryOp::Division, ll, lr)) = left.as_binary() {
        if let Some(merged) = combine_multiply(lr, right, ind_left, ind_right) {
            return Some(division_check(ll, &merged, ind_left, 1.0));
        }
        if let Some(merged) = combine_division(ll, right, ind_left, ind_right) {
            return Some(division_check(&merged, lr, 1.0, ind_left));
        }
    }

    if let Some((BinaryOp::Division, rl, rr)) = right.as_binary() {
        if let Some(merged) = combine_multiply(left, rr, ind_left, ind_right) {
            return Some(division_check(&merged, rl, 1.0, ind_right));
        }
        if let Some(merged) = combine_division(left, rl, ind_left, ind_right) {
            return Some(multiply_check(&merged, rr, 1.0, ind_right));
        }
    }

    if left == right {
        return Some(determinate_pow(left, ind_left - ind_right));
    }

    fold_powers(left, right, ind_left, ind_right, |l, r| l / r)
}

/// Fold `l^ind_left (op) r^ind_right` when both bases are numbers
fn fold_powers(
    left: &Expr,
    right: &Expr,
    ind_left: f64,
    ind_right: f64,
    op: impl Fn(f64, f64) -> f64,
) -> Option<Expr> {
    let (Expr::Number(l), Expr::Number(r)) = (left, right) else {
        return None;
    };
    let value = op(l.powf(ind_left), r.powf(ind_right));
    value.is_finite().then(|| clean_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::UnaryOp;

    fn x() -> Expr {
        Expr::variable('x')
    }

    fn y() -> Expr {
        Expr::variable('y')
    }

    fn pow(base: Expr, e: f64) -> Expr {
        Expr::binary(BinaryOp::Pow, base, Expr::number(e))
    }

    fn mul(l: Expr, r: Expr) -> Expr {
        Expr::binary(BinaryOp::Multiply, l, r)
    }

    fn div(l: Expr, r: Expr) -> Expr {
        Expr::binary(BinaryOp::Division, l, r)
    }

    #[test]
    fn test_simple_identities() {
        assert_eq!(reduce_multiply(&x(), &Expr::number(0.0)), Some(Expr::number(0.0)));
        assert_eq!(reduce_multiply(&Expr::number(0.0), &x()), Some(Expr::number(0.0)));
        assert_eq!(reduce_multiply(&Expr::number(1.0), &x()), Some(x()));
        assert_eq!(reduce_multiply(&x(), &Expr::number(1.0)), Some(x()));
        assert_eq!(reduce_division(&Expr::number(0.0), &x()), Some(Expr::number(0.0)));
        assert_eq!(reduce_division(&x(), &Expr::number(1.0)), Some(x()));
    }

    #[test]
    fn test_equal_bases_merge() {
        assert_eq!(reduce_multiply(&x(), &x()), Some(pow(x(), 2.0)));
        assert_eq!(reduce_division(&x(), &x()), Some(Expr::number(1.0)));
        assert_eq!(reduce_multiply(&pow(x(), 2.0), &pow(x(), -2.0)), Some(Expr::number(1.0)));
        assert_eq!(reduce_division(&pow(x(), 3.0), &x()), Some(pow(x(), 2.0)));
    }

    #[test]
    fn test_numbers_fold() {
        assert_eq!(
            reduce_multiply(&Expr::number(2.0), &Expr::number(3.0)),
            Some(Expr::number(6.0))
        );
        assert_eq!(
            reduce_division(&Expr::number(3.0), &Expr::number(4.0)),
            Some(Expr::number(0.75))
        );
    }

    #[test]
    fn test_merges_into_nested_product() {
        // (x * y) * x -> y * x^2
        let merged = reduce_multiply(&mul(x(), y()), &x()).unwrap();
        assert_eq!(merged, mul(y(), pow(x(), 2.0)));

        // 2 * (3 * y) -> 6 * y
        let merged = reduce_multiply(&Expr::number(2.0), &mul(Expr::number(3.0), y())).unwrap();
        assert_eq!(merged, mul(Expr::number(6.0), y()));
    }

    #[test]
    fn test_merges_across_quotients() {
        // (x / y) * y -> x
        assert_eq!(reduce_multiply(&div(x(), y()), &y()), Some(x()));
        // (x * y) / x -> y
        assert_eq!(reduce_division(&mul(x(), y()), &x()), Some(y()));
        // x / (x / y) -> y
        assert_eq!(reduce_division(&x(), &div(x(), y())), Some(y()));
    }

    #[test]
    fn test_long_chains_without_common_factors() {
        // (x + 1)(x + 2)...(x + 6) * (x + 7)...(x + 12), nothing merges
        let chain = |from: i32| {
            (from..from + 6)
                .map(|k| Expr::binary(BinaryOp::Sum, x(), Expr::number(f64::from(k))))
                .reduce(mul)
                .unwrap()
        };
        let (left, right) = (chain(1), chain(7));
        assert_eq!(reduce_multiply(&left, &right), None);

        let product = crate::reduce(mul(left, right));
        let value = product.evaluate(&[('x', 0.5)]).unwrap();
        let expected: f64 = (1..=12).map(|k| 0.5 + f64::from(k)).product();
        assert!((value - expected).abs() <= 1e-9 * expected);
    }

    #[test]
    fn test_unrelated_factors_are_kept() {
        let s = Expr::unary(UnaryOp::Sin, x());
        assert_eq!(reduce_multiply(&s, &y()), None);
        assert_eq!(reduce_division(&x(), &y()), None);
    }
}
