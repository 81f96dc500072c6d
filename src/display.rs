// Display formatting for AST
use crate::ast::{BinaryOp, Expr};
use std::fmt;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", format_number(*n)),
            Expr::Variable(c) => write!(f, "{}", c),
            Expr::ConstantE => write!(f, "e"),
            Expr::ConstantPi => write!(f, "pi"),
            Expr::Factorial(fact) => write!(f, "{}!", fact.n()),
            Expr::Unary { op, value } => write!(f, "{}({})", op.name(), value),

            Expr::Binary { op, left, right } => {
                // (-1) * u is rendered as the opposite of u
                if *op == BinaryOp::Multiply && left.is_number(-1.0) {
                    return write!(f, "{}", opposite(right));
                }

                let priority = op.priority();
                let (left_str, right_str) = match op {
                    // Right associative: a^(b^c) needs no parentheses on the right
                    BinaryOp::Pow => (
                        wrap_operand(left, true, |p| p <= priority),
                        wrap_operand(right, true, |p| p < priority),
                    ),
                    BinaryOp::Subtraction | BinaryOp::Division => (
                        wrap_operand(left, false, |p| p < priority),
                        wrap_operand(right, true, |p| p <= priority),
                    ),
                    BinaryOp::Sum | BinaryOp::Multiply => (
                        wrap_operand(left, false, |p| p < priority),
                        wrap_operand(right, true, |p| p < priority),
                    ),
                };

                match op {
                    BinaryOp::Sum => write!(f, "{} + {}", left_str, right_str),
                    BinaryOp::Subtraction => write!(f, "{} - {}", left_str, right_str),
                    BinaryOp::Multiply => write!(f, "{} * {}", left_str, right_str),
                    BinaryOp::Division => write!(f, "{} / {}", left_str, right_str),
                    BinaryOp::Pow => write!(f, "{}^{}", left_str, right_str),
                }
            }
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e10 {
        // Display as integer if no fractional part
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Parenthesize an operand when `needs_parens(priority)` holds, or when it
/// renders with a leading sign and `wrap_negative` is set
fn wrap_operand(expr: &Expr, wrap_negative: bool, needs_parens: impl Fn(u8) -> bool) -> String {
    let text = expr.to_string();
    if needs_parens(expr.priority()) || (wrap_negative && text.starts_with('-')) {
        format!("({})", text)
    } else {
        text
    }
}

/// Textual negation: `-(-u)` drops the sign, `0` stays `0`, sums are
/// wrapped in parentheses
fn opposite(expr: &Expr) -> String {
    let text = expr.to_string();
    if text == "0" {
        text
    } else if let Some(stripped) = text.strip_prefix('-')
        && expr.priority() >= BinaryOp::Multiply.priority()
    {
        stripped.to_string()
    } else if expr.priority() == BinaryOp::Sum.priority() {
        format!("-({})", text)
    } else {
        format!("-{}", text)
    }
}
