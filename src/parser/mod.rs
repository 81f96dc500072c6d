//! Parser module - converts strings to AST
mod implicit_mul;
mod lexer;
mod pratt;
mod tokens;

use crate::ast::Expr;
use crate::error::SolveError;
use crate::simplification::reduce;

/// Parse a formula string into a reduced expression AST
///
/// Supports numeric literals (`3`, `2.5`, `1e-3`), single-letter variables,
/// the constants `e` and `pi`, the operators `+ - * / ^`, integer
/// factorials (`5!`), parentheses, and the functions `sin cos tan cot sec
/// csc asin acos atan acot ln log exp sqrt` (inverse trig functions may
/// also be spelled `arcsin` etc.). Multiplication may be implicit: `2xy`
/// is `2 * x * y`.
///
/// # Example
/// ```
/// use symb_solve::parse;
///
/// let expr = parse("2x + sin(pi)").unwrap();
/// assert_eq!(expr.to_string(), "2 * x");
/// ```
///
/// # Errors
/// Returns `SolveError` if:
/// - The input is empty
/// - The input contains an unknown character or a malformed number
/// - Parentheses are unbalanced or an operand is missing
pub fn parse(input: &str) -> Result<Expr, SolveError> {
    // Pipeline: validate -> lex -> implicit_mul -> parse -> reduce

    if input.trim().is_empty() {
        return Err(SolveError::EmptyFormula);
    }

    let tokens = lexer::lex(input)?;
    let tokens = implicit_mul::insert_implicit_multiplication(tokens);
    let expr = pratt::parse_expression(&tokens)?;

    Ok(reduce(expr))
}

/// [`parse`] with every failure collapsed to `None`
pub fn parse_opt(input: &str) -> Option<Expr> {
    parse(input).ok()
}
