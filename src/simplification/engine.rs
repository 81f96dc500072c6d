//! Bottom-up reduction driver
//!
//! Re-applies the node rules over the whole tree until a pass leaves it
//! unchanged, with a pass limit and cycle detection as guards.

use std::hash::{Hash, Hasher};

use log::{trace, warn};
use rustc_hash::FxHasher;

use super::reduce_node;
use crate::ast::Expr;

/// Default maximum number of full passes over the tree
const DEFAULT_MAX_PASSES: usize = 64;

pub(crate) struct Reducer {
    max_passes: usize,
}

impl Default for Reducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer {
    pub fn new() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    #[cfg(test)]
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    /// Reduce until a fixpoint, a cycle, or the pass limit
    ///
    /// When the passes cycle, the smallest form on the cycle is returned so
    /// that reducing the result again lands on the same form.
    pub fn reduce(&self, expr: Expr) -> Expr {
        let mut current = expr;
        let mut history: Vec<(u64, Expr)> = Vec::new();

        for pass in 0..self.max_passes {
            let next = self.reduce_bottom_up(&current);

            // Structural equality decides whether anything changed
            if next == current {
                return next;
            }

            trace!("reduction pass {}: {} -> {}", pass, current, next);
            history.push((fingerprint(&current), current));

            let print = fingerprint(&next);
            if let Some(start) = history.iter().position(|(seen, _)| *seen == print) {
                trace!("reduction cycle detected after {} pass(es)", pass + 1);
                return smallest(history.split_off(start)).unwrap_or(next);
            }
            current = next;
        }

        warn!(
            "reduction exceeded maximum passes ({}), returning last form",
            self.max_passes
        );
        current
    }

    fn reduce_bottom_up(&self, expr: &Expr) -> Expr {
        match expr {
            Expr::Binary { op, left, right } => reduce_node(Expr::binary(
                *op,
                self.reduce_bottom_up(left),
                self.reduce_bottom_up(right),
            )),
            Expr::Unary { op, value } => {
                reduce_node(Expr::unary(*op, self.reduce_bottom_up(value)))
            }
            leaf => leaf.clone(),
        }
    }
}

/// Canonical pick among the forms of a cycle: fewest nodes, then lowest
/// fingerprint
fn smallest(cycle: Vec<(u64, Expr)>) -> Option<Expr> {
    cycle
        .into_iter()
        .min_by_key(|(print, expr)| (expr.node_count(), *print))
        .map(|(_, expr)| expr)
}

fn fingerprint(expr: &Expr) -> u64 {
    let mut hasher = FxHasher::default();
    expr.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, UnaryOp};

    #[test]
    fn test_reduces_nested_raw_tree() {
        // (2 * 3) + (x - x)
        let expr = Expr::binary(
            BinaryOp::Sum,
            Expr::binary(BinaryOp::Multiply, Expr::number(2.0), Expr::number(3.0)),
            Expr::binary(
                BinaryOp::Subtraction,
                Expr::variable('x'),
                Expr::variable('x'),
            ),
        );
        assert_eq!(Reducer::new().reduce(expr), Expr::number(6.0));
    }

    #[test]
    fn test_fixpoint_is_stable() {
        let expr = Expr::binary(
            BinaryOp::Multiply,
            Expr::unary(UnaryOp::Sin, Expr::variable('x')),
            Expr::binary(BinaryOp::Pow, Expr::variable('x'), Expr::number(2.0)),
        );
        let once = Reducer::new().reduce(expr);
        let twice = Reducer::new().reduce(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_single_pass_limit_still_returns_tree() {
        let expr = Expr::binary(
            BinaryOp::Sum,
            Expr::binary(BinaryOp::Sum, Expr::number(1.0), Expr::number(1.0)),
            Expr::number(1.0),
        );
        let reduced = Reducer::new().with_max_passes(1).reduce(expr);
        assert_eq!(reduced, Expr::number(3.0));
    }
}
