use thiserror::Error;

/// Source location span for error reporting
/// Represents a range of characters in the input string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position (0-indexed byte offset)
    pub start: usize,
    /// End position (exclusive, 0-indexed byte offset)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Create a span for a single position
    pub fn at(pos: usize) -> Self {
        Span {
            start: pos,
            end: pos + 1,
        }
    }

    /// Check if this span has valid location info
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// Format the span for display (1-indexed for users)
    pub fn display(&self) -> String {
        if !self.is_valid() {
            String::new()
        } else if self.end - self.start == 1 {
            format!(" at position {}", self.start + 1)
        } else {
            format!(" at positions {}-{}", self.start + 1, self.end)
        }
    }
}

fn span_suffix(span: &Option<Span>) -> String {
    span.map_or(String::new(), |s| s.display())
}

/// Errors that can occur while parsing, assembling or solving a system
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    // Parsing errors
    #[error("Formula cannot be empty")]
    EmptyFormula,

    #[error("Invalid number format: '{value}'{}", span_suffix(.span))]
    InvalidNumber { value: String, span: Option<Span> },

    #[error("Invalid token: '{token}'{}", span_suffix(.span))]
    InvalidToken { token: String, span: Option<Span> },

    #[error("Expected {expected}, got {got}{}", span_suffix(.span))]
    UnexpectedToken {
        expected: String,
        got: String,
        span: Option<Span>,
    },

    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,

    // Equation assembly errors
    #[error("Equation '{0}' has no '=' sign")]
    MissingEquals(String),

    #[error("Equation '{0}' has more than one '=' sign")]
    MultipleEquals(String),

    #[error("System contains no equations")]
    EmptySystem,

    #[error("System has {equations} equation(s) but {variables} distinct variable(s)")]
    IllPosedSystem { equations: usize, variables: usize },

    // Evaluation errors
    #[error("No value bound for variable '{0}'")]
    UnboundVariable(char),

    // Numeric failures
    #[error("Newton-Raphson diverged after {iterations} iteration(s)")]
    Diverged { iterations: usize },

    #[error("No root found")]
    NoRootFound,
}

impl SolveError {
    /// Create InvalidToken without span
    pub fn invalid_token(token: impl Into<String>) -> Self {
        SolveError::InvalidToken {
            token: token.into(),
            span: None,
        }
    }

    /// Create InvalidToken with span
    pub fn invalid_token_at(token: impl Into<String>, span: Span) -> Self {
        SolveError::InvalidToken {
            token: token.into(),
            span: Some(span),
        }
    }

    /// Whether the error means the equations themselves were rejected
    /// (as opposed to the numeric method failing on a well-posed system)
    pub fn is_incorrect_equations(&self) -> bool {
        !matches!(
            self,
            SolveError::UnboundVariable(_) | SolveError::Diverged { .. } | SolveError::NoRootFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_display() {
        assert_eq!(Span::at(3).display(), " at position 4");
        assert_eq!(Span::new(2, 5).display(), " at positions 3-5");
        assert_eq!(Span::default().display(), "");
    }

    #[test]
    fn test_error_messages() {
        let err = SolveError::invalid_token_at("#", Span::at(0));
        assert_eq!(err.to_string(), "Invalid token: '#' at position 1");

        let err = SolveError::IllPosedSystem {
            equations: 1,
            variables: 2,
        };
        assert_eq!(
            err.to_string(),
            "System has 1 equation(s) but 2 distinct variable(s)"
        );
    }

    #[test]
    fn test_classification() {
        assert!(SolveError::MissingEquals("x".into()).is_incorrect_equations());
        assert!(SolveError::EmptySystem.is_incorrect_equations());
        assert!(!SolveError::NoRootFound.is_incorrect_equations());
        assert!(!SolveError::Diverged { iterations: 3 }.is_incorrect_equations());
    }
}
