//! Reducing combinators and operator overloading for `Expr`
//!
//! Every combinator builds the node and immediately runs it through the
//! reduction rules, so `x * 1` comes back as `x`.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::simplification::reduce_node;

impl Expr {
    /// Build and reduce a binary node
    pub fn combine(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        reduce_node(Expr::binary(op, left, right))
    }

    /// Build and reduce a unary node
    pub fn apply(op: UnaryOp, value: Expr) -> Expr {
        reduce_node(Expr::unary(op, value))
    }

    /// Raise to a power
    ///
    /// # Example
    /// ```
    /// use symb_solve::Expr;
    /// let x = Expr::variable('x');
    /// assert_eq!(x.clone().pow(1.0), x);
    /// ```
    pub fn pow(self, exponent: impl Into<Expr>) -> Expr {
        Expr::combine(BinaryOp::Pow, self, exponent.into())
    }

    pub fn sin(self) -> Expr {
        Expr::apply(UnaryOp::Sin, self)
    }

    pub fn cos(self) -> Expr {
        Expr::apply(UnaryOp::Cos, self)
    }

    pub fn tan(self) -> Expr {
        Expr::apply(UnaryOp::Tan, self)
    }

    pub fn ln(self) -> Expr {
        Expr::apply(UnaryOp::Ln, self)
    }
}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Expr::number(n)
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Expr::number(f64::from(n))
    }
}

impl From<char> for Expr {
    fn from(c: char) -> Self {
        Expr::variable(c)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait<Expr> for Expr {
            type Output = Expr;
            fn $method(self, rhs: Expr) -> Expr {
                Expr::combine($op, self, rhs)
            }
        }

        impl $trait<&Expr> for Expr {
            type Output = Expr;
            fn $method(self, rhs: &Expr) -> Expr {
                Expr::combine($op, self, rhs.clone())
            }
        }

        impl $trait<Expr> for &Expr {
            type Output = Expr;
            fn $method(self, rhs: Expr) -> Expr {
                Expr::combine($op, self.clone(), rhs)
            }
        }

        impl $trait<&Expr> for &Expr {
            type Output = Expr;
            fn $method(self, rhs: &Expr) -> Expr {
                Expr::combine($op, self.clone(), rhs.clone())
            }
        }

        impl $trait<f64> for Expr {
            type Output = Expr;
            fn $method(self, rhs: f64) -> Expr {
                Expr::combine($op, self, Expr::number(rhs))
            }
        }

        impl $trait<f64> for &Expr {
            type Output = Expr;
            fn $method(self, rhs: f64) -> Expr {
                Expr::combine($op, self.clone(), Expr::number(rhs))
            }
        }
    };
}

impl_binary_op!(Add, add, BinaryOp::Sum);
impl_binary_op!(Sub, sub, BinaryOp::Subtraction);
impl_binary_op!(Mul, mul, BinaryOp::Multiply);
impl_binary_op!(Div, div, BinaryOp::Division);

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr::combine(BinaryOp::Multiply, Expr::number(-1.0), self)
    }
}

impl Neg for &Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        -self.clone()
    }
}
