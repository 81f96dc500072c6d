use crate::ast::UnaryOp;

/// Operators and built-in function names recognised by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Pow,

    // Functions mapped directly onto a unary node
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
    Asin,
    Acos,
    Atan,
    Acot,
    Ln,

    // Functions rewritten into other nodes
    Log,
    Exp,
    Sqrt,
}

/// Function names in longest-first order, so `arcsin` wins over `asin`
/// and `sin` when a letter run is split
pub(crate) const FUNCTION_NAMES: &[(&str, Operator)] = &[
    ("arcsin", Operator::Asin),
    ("arccos", Operator::Acos),
    ("arctan", Operator::Atan),
    ("arccot", Operator::Acot),
    ("asin", Operator::Asin),
    ("acos", Operator::Acos),
    ("atan", Operator::Atan),
    ("acot", Operator::Acot),
    ("sqrt", Operator::Sqrt),
    ("sin", Operator::Sin),
    ("cos", Operator::Cos),
    ("tan", Operator::Tan),
    ("cot", Operator::Cot),
    ("sec", Operator::Sec),
    ("csc", Operator::Csc),
    ("log", Operator::Log),
    ("exp", Operator::Exp),
    ("ln", Operator::Ln),
];

impl Operator {
    pub(crate) fn is_function(self) -> bool {
        !matches!(
            self,
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div | Operator::Pow
        )
    }

    /// Binding power of an infix operator
    pub(crate) fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 10,
            Operator::Mul | Operator::Div => 20,
            Operator::Pow => 30,
            _ => 40, // Functions bind tighter than any infix operator
        }
    }

    /// The unary node a function maps onto, if it maps onto one directly
    pub(crate) fn unary_op(self) -> Option<UnaryOp> {
        Some(match self {
            Operator::Sin => UnaryOp::Sin,
            Operator::Cos => UnaryOp::Cos,
            Operator::Tan => UnaryOp::Tan,
            Operator::Cot => UnaryOp::Cot,
            Operator::Sec => UnaryOp::Sec,
            Operator::Csc => UnaryOp::Csc,
            Operator::Asin => UnaryOp::Arcsin,
            Operator::Acos => UnaryOp::Arccos,
            Operator::Atan => UnaryOp::Arctan,
            Operator::Acot => UnaryOp::Arccot,
            Operator::Ln => UnaryOp::Ln,
            _ => return None,
        })
    }

    pub(crate) fn to_name(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
            Operator::Log => "log",
            Operator::Exp => "exp",
            Operator::Sqrt => "sqrt",
            other => other.unary_op().map_or("?", UnaryOp::name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Variable(char),
    ConstantE,
    ConstantPi,
    /// Integer literal followed by `!`
    Factorial(i32),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    /// Render the token the way the user typed it, for error messages
    pub(crate) fn to_user_string(&self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Variable(c) => c.to_string(),
            Token::ConstantE => "e".to_string(),
            Token::ConstantPi => "pi".to_string(),
            Token::Factorial(n) => format!("{}!", n),
            Token::Operator(op) => op.to_name().to_string(),
            Token::LeftParen => "(".to_string(),
            Token::RightParen => ")".to_string(),
        }
    }

    /// Tokens that can end an operand
    pub(crate) fn ends_operand(&self) -> bool {
        matches!(
            self,
            Token::Number(_)
                | Token::Variable(_)
                | Token::ConstantE
                | Token::ConstantPi
                | Token::Factorial(_)
                | Token::RightParen
        )
    }
}
