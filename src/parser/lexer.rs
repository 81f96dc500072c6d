//! Lexer: turns formula text into tokens
//!
//! Letter runs are split greedily: at each position the longest function
//! name or `pi` is taken, otherwise a single letter becomes a variable (or
//! the constant `e`).

use crate::error::{SolveError, Span};
use crate::parser::tokens::{FUNCTION_NAMES, Operator, Token};

pub(crate) fn lex(input: &str) -> Result<Vec<Token>, SolveError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::with_capacity(input.len());
    let mut pos = 0;

    while pos < bytes.len() {
        let c = bytes[pos];
        match c {
            b' ' | b'\t' | b'\n' | b'\r' => pos += 1,
            b'0'..=b'9' | b'.' => pos = lex_number(input, pos, &mut tokens)?,
            b'a'..=b'z' | b'A'..=b'Z' => {
                let start = pos;
                while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
                    pos += 1;
                }
                split_letters(&input[start..pos], &mut tokens);
            }
            b'+' | b'-' | b'*' | b'/' | b'^' => {
                let op = match c {
                    b'+' => Operator::Add,
                    b'-' => Operator::Sub,
                    b'*' => Operator::Mul,
                    b'/' => Operator::Div,
                    _ => Operator::Pow,
                };
                tokens.push(Token::Operator(op));
                pos += 1;
            }
            b'(' => {
                tokens.push(Token::LeftParen);
                pos += 1;
            }
            b')' => {
                tokens.push(Token::RightParen);
                pos += 1;
            }
            _ => {
                // Report the whole (possibly multi-byte) character
                let ch = input[pos..].chars().next().unwrap_or('?');
                return Err(SolveError::invalid_token_at(
                    ch.to_string(),
                    Span::new(pos, pos + ch.len_utf8()),
                ));
            }
        }
    }

    Ok(tokens)
}

/// Lex a numeric literal starting at `start`, returning the position after
/// it. A trailing `!` on an integer literal produces a factorial token.
fn lex_number(input: &str, start: usize, tokens: &mut Vec<Token>) -> Result<usize, SolveError> {
    let bytes = input.as_bytes();
    let mut pos = start;
    while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
        pos += 1;
    }

    // Scientific notation only when digits follow; `2e` is `2 * e`
    let mut has_exponent = false;
    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut probe = pos + 1;
        if probe < bytes.len() && matches!(bytes[probe], b'+' | b'-') {
            probe += 1;
        }
        if probe < bytes.len() && bytes[probe].is_ascii_digit() {
            pos = probe;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            has_exponent = true;
        }
    }

    let text = &input[start..pos];
    let span = Span::new(start, pos);
    let value: f64 = text.parse().map_err(|_| SolveError::InvalidNumber {
        value: text.to_string(),
        span: Some(span),
    })?;

    if pos < bytes.len() && bytes[pos] == b'!' {
        let is_integer = !has_exponent && !text.contains('.');
        return match text.parse::<i32>() {
            Ok(n) if is_integer => {
                tokens.push(Token::Factorial(n));
                Ok(pos + 1)
            }
            _ => Err(SolveError::invalid_token_at("!", Span::at(pos))),
        };
    }

    tokens.push(Token::Number(value));
    Ok(pos)
}

fn split_letters(run: &str, tokens: &mut Vec<Token>) {
    let mut rest = run;
    while !rest.is_empty() {
        if let Some((name, op)) = FUNCTION_NAMES.iter().find(|(name, _)| rest.starts_with(name)) {
            tokens.push(Token::Operator(*op));
            rest = &rest[name.len()..];
            continue;
        }
        if let Some(after) = rest.strip_prefix("pi") {
            tokens.push(Token::ConstantPi);
            rest = after;
            continue;
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            tokens.push(if c == 'e' {
                Token::ConstantE
            } else {
                Token::Variable(c)
            });
        }
        rest = chars.as_str();
    }
}
