#[cfg(test)]
mod tests {
    use crate::{BinaryOp, Expr, SolveError, Span, UnaryOp, parse, parse_opt};

    fn eval(source: &str, bindings: &[(char, f64)]) -> f64 {
        parse(source).unwrap().evaluate(bindings).unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Err(SolveError::EmptyFormula));
        assert_eq!(parse("   "), Err(SolveError::EmptyFormula));
        assert_eq!(parse_opt(""), None);
    }

    #[test]
    fn test_constants() {
        assert_eq!(parse("pi").unwrap(), Expr::ConstantPi);
        assert_eq!(parse("e").unwrap(), Expr::ConstantE);
        assert!((eval("2e", &[]) - 2.0 * std::f64::consts::E).abs() < 1e-12);
        assert_eq!(eval("2e3", &[]), 2000.0);
    }

    #[test]
    fn test_functions() {
        assert_eq!(
            parse("arcsin(x)").unwrap(),
            Expr::unary(UnaryOp::Arcsin, Expr::variable('x'))
        );
        assert_eq!(parse("asin(x)").unwrap(), parse("arcsin(x)").unwrap());
        assert_eq!(
            parse("sqrt(x)").unwrap(),
            Expr::binary(BinaryOp::Pow, Expr::variable('x'), Expr::number(0.5))
        );
        assert_eq!(
            parse("exp(x)").unwrap(),
            Expr::binary(BinaryOp::Pow, Expr::ConstantE, Expr::variable('x'))
        );
        assert!((eval("log(1000)", &[]) - 3.0).abs() < 1e-12);
        assert!((eval("ln(x)", &[('x', std::f64::consts::E)]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(parse("5!").unwrap(), Expr::factorial(5));
        assert_eq!(eval("3! + 1", &[]), 7.0);
        assert_eq!(eval("2 * 4!", &[]), 48.0);
    }

    #[test]
    fn test_implicit_multiplication() {
        let bindings = [('x', 2.0), ('y', 3.0)];
        assert_eq!(eval("2xy", &bindings), 12.0);
        assert_eq!(eval("x(y + 1)", &bindings), 8.0);
        assert_eq!(eval("(x)(y)", &bindings), 6.0);
        assert_eq!(eval("3 sin(0)", &bindings), 0.0);
    }

    #[test]
    fn test_precedence_and_associativity() {
        let bindings = [('x', 2.0)];
        assert_eq!(eval("1 + 2 * 3", &[]), 7.0);
        assert_eq!(eval("2^3^2", &[]), 512.0);
        assert_eq!(eval("-x^2", &bindings), -4.0);
        assert_eq!(eval("8 / 4 / 2", &[]), 1.0);
        assert_eq!(eval("10 - 4 - 3", &[]), 3.0);
        assert_eq!(eval("+x", &bindings), 2.0);
        assert_eq!(parse("-3").unwrap(), Expr::number(-3.0));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse("x + $"),
            Err(SolveError::invalid_token_at("$", Span::at(4)))
        );
        assert_eq!(parse("(x + 1"), Err(SolveError::UnexpectedEndOfInput));
        assert!(matches!(parse("x + 1)"), Err(SolveError::UnexpectedToken { .. })));
        assert!(matches!(parse("sin x"), Err(SolveError::UnexpectedToken { .. })));
        assert!(matches!(parse("1.2.3"), Err(SolveError::InvalidNumber { .. })));
        assert!(parse("*x").is_err());
        assert_eq!(parse_opt("x +"), None);
    }

    #[test]
    fn test_display_round_trip() {
        for source in [
            "x + 1",
            "(x + 1) * y",
            "x - (y - 1)",
            "x / (y * 2)",
            "(x + y)^2",
            "-(x + y)",
            "x^(-1) + sin(x)",
            "2^x^2",
        ] {
            let expr = parse(source).unwrap();
            let reparsed = parse(&expr.to_string()).unwrap();
            assert_eq!(reparsed, expr, "{source} rendered as {expr}");
        }
    }

    #[test]
    fn test_never_panics_on_edge_cases() {
        let edge_cases = [
            "", "   ", "()", "((()))", "+++", "---x", "1+", "+1", "sin()", "1..2", "1e999999",
            "x^y^z", "((((x))))", "1/0", "0/0", "(-0)", "π", "ℯ", "9999999999!", "0!",
        ];
        for case in edge_cases {
            let _ = parse(case);
        }
    }
}
