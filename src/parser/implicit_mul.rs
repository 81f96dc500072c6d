//! Implicit multiplication insertion for natural notation
//!
//! Inserts `*` operators between tokens where multiplication is implied, e.g. `2x` → `2 * x`.

use crate::parser::tokens::{Operator, Token};

/// Check if implicit multiplication should be inserted between two tokens
fn should_insert_mul(current: &Token, next: &Token) -> bool {
    if !current.ends_operand() {
        return false;
    }
    match next {
        // Number after number stays an error: `2 3` is not `6`
        Token::Number(_) | Token::Factorial(_) => !matches!(
            current,
            Token::Number(_) | Token::Factorial(_)
        ),
        Token::Variable(_) | Token::ConstantE | Token::ConstantPi | Token::LeftParen => true,
        // Operand followed by a function: 4 sin(x) → 4 * sin(x)
        Token::Operator(op) => op.is_function(),
        Token::RightParen => false,
    }
}

/// Insert implicit multiplication operators between appropriate tokens
///
/// Rules:
/// - Number * Variable/Constant: `2x` → `2 * x`, `3pi` → `3 * pi`
/// - Variable * Variable: `xy` → `x * y`
/// - Operand * Function: `x sin(y)` → `x * sin(y)`
/// - ) * operand or (: `(a)(b)` → `(a) * (b)`
/// - Operand * (: `x(y + 1)` → `x * (y + 1)`
///
/// Exception: a function followed by ( is a call, not a product
pub(crate) fn insert_implicit_multiplication(tokens: Vec<Token>) -> Vec<Token> {
    let needs_insertion = tokens.windows(2).any(|w| should_insert_mul(&w[0], &w[1]));
    if !needs_insertion {
        return tokens;
    }

    let mut result = Vec::with_capacity(tokens.len() * 3 / 2);
    let mut it = tokens.into_iter().peekable();

    while let Some(current) = it.next() {
        let needs_mul = it
            .peek()
            .is_some_and(|next| should_insert_mul(&current, next));

        result.push(current);
        if needs_mul {
            result.push(Token::Operator(Operator::Mul));
        }
    }

    result
}
