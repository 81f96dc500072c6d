use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::error::SolveError;
use crate::parser::tokens::{Operator, Token};

/// Binding power of unary minus: below `^`, above `*` so `-x^2` is `-(x^2)`
const UNARY_PRECEDENCE: u8 = 25;

/// Parse tokens into an AST using Pratt parsing algorithm
pub(crate) fn parse_expression(tokens: &[Token]) -> Result<Expr, SolveError> {
    if tokens.is_empty() {
        return Err(SolveError::UnexpectedEndOfInput);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_expr(0)?;

    match parser.current() {
        None => Ok(expr),
        Some(token) => Err(SolveError::UnexpectedToken {
            expected: "end of input".to_string(),
            got: token.to_user_string(),
            span: None,
        }),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn parse_expr(&mut self, min_precedence: u8) -> Result<Expr, SolveError> {
        let mut left = self.parse_prefix()?;

        while let Some(Token::Operator(op)) = self.current() {
            if op.is_function() {
                break;
            }
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            left = self.parse_infix(left, *op, precedence)?;
        }

        Ok(left)
    }

    fn expect_right_paren(&mut self) -> Result<(), SolveError> {
        match self.current() {
            Some(Token::RightParen) => {
                self.advance();
                Ok(())
            }
            Some(token) => Err(SolveError::UnexpectedToken {
                expected: ")".to_string(),
                got: token.to_user_string(),
                span: None,
            }),
            None => Err(SolveError::UnexpectedEndOfInput),
        }
    }

    fn parse_prefix(&mut self) -> Result<Expr, SolveError> {
        let token = self.current().ok_or(SolveError::UnexpectedEndOfInput)?;

        match token {
            Token::Number(n) => {
                self.advance();
                Ok(Expr::number(*n))
            }
            Token::Variable(c) => {
                self.advance();
                Ok(Expr::variable(*c))
            }
            Token::ConstantE => {
                self.advance();
                Ok(Expr::ConstantE)
            }
            Token::ConstantPi => {
                self.advance();
                Ok(Expr::ConstantPi)
            }
            Token::Factorial(n) => {
                self.advance();
                Ok(Expr::factorial(*n))
            }

            Token::Operator(op) if op.is_function() => {
                self.advance();

                // Function must be followed by (
                match self.current() {
                    Some(Token::LeftParen) => self.advance(),
                    Some(other) => {
                        return Err(SolveError::UnexpectedToken {
                            expected: format!("( after {}", op.to_name()),
                            got: other.to_user_string(),
                            span: None,
                        });
                    }
                    None => return Err(SolveError::UnexpectedEndOfInput),
                }
                let arg = self.parse_expr(0)?;
                self.expect_right_paren()?;

                Ok(build_function(*op, arg))
            }

            Token::Operator(Operator::Sub) => {
                self.advance();
                let expr = self.parse_expr(UNARY_PRECEDENCE)?;
                Ok(Expr::number(-1.0) * expr)
            }

            // Unary plus: same precedence as unary minus, just returns the expression
            Token::Operator(Operator::Add) => {
                self.advance();
                self.parse_expr(UNARY_PRECEDENCE)
            }

            Token::LeftParen => {
                self.advance();
                let expr = self.parse_expr(0)?;
                self.expect_right_paren()?;
                Ok(expr)
            }

            _ => Err(SolveError::invalid_token(token.to_user_string())),
        }
    }

    fn parse_infix(&mut self, left: Expr, op: Operator, precedence: u8) -> Result<Expr, SolveError> {
        self.advance();

        // Right associative for power, left for others
        let next_precedence = if op == Operator::Pow {
            precedence
        } else {
            precedence + 1
        };
        let right = self.parse_expr(next_precedence)?;

        let op = match op {
            Operator::Add => BinaryOp::Sum,
            Operator::Sub => BinaryOp::Subtraction,
            Operator::Mul => BinaryOp::Multiply,
            Operator::Div => BinaryOp::Division,
            Operator::Pow => BinaryOp::Pow,
            other => {
                return Err(SolveError::invalid_token(format!(
                    "operator '{}'",
                    other.to_name()
                )));
            }
        };
        Ok(Expr::combine(op, left, right))
    }
}

/// Build the node for a function application; `log`, `exp` and `sqrt` are
/// expressed through `Ln` and `Pow`
fn build_function(op: Operator, arg: Expr) -> Expr {
    if let Some(unary) = op.unary_op() {
        return Expr::apply(unary, arg);
    }
    match op {
        Operator::Exp => Expr::ConstantE.pow(arg),
        Operator::Sqrt => arg.pow(0.5),
        // log base 10
        _ => Expr::apply(UnaryOp::Ln, arg) / Expr::apply(UnaryOp::Ln, Expr::number(10.0)),
    }
}
