use prattle::{
    Error,
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, scan_tokens},
        parser::{
            binary::{
                IMPLICIT_MULTIPLICATION, INFIX_OPERATORS, PREFIX_BINDING_POWER, infix_binding_power,
                starts_implicit_operand,
            },
            core::{MAX_NESTING_DEPTH, MAX_TOKENS, parse_tokens},
        },
    },
    parse,
};

fn printed(source: &str) -> String {
    parse(source).unwrap_or_else(|e| panic!("{source:?} failed to parse: {e}"))
                 .to_string()
}

fn parse_error(source: &str) -> ParseError {
    match parse(source) {
        Err(Error::Parse(e)) => e,
        other => panic!("{source:?} should be a syntax error, got {other:?}"),
    }
}

#[test]
fn literal_keeps_its_text() {
    assert_eq!(parse("2.50").unwrap(), Expr::literal("2.50", 1));
    assert_eq!(parse("pi").unwrap(), Expr::literal("pi", 1));
    assert_eq!(parse("e").unwrap(), Expr::literal("e", 1));
    assert_eq!(parse("x").unwrap(), Expr::literal("x", 1));
}

#[test]
fn builds_nodes_with_operators() {
    let expected = Expr::binary(Expr::literal("1", 1),
                                BinaryOperator::Add,
                                Expr::unary(UnaryOperator::Sqrt, Expr::literal("4", 1), 1),
                                1);
    assert_eq!(parse("1 + $4").unwrap(), expected);
}

#[test]
fn precedence() {
    assert_eq!(printed("1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(printed("1 * 2 + 3"), "((1 * 2) + 3)");
    assert_eq!(printed("(1 + 2) * 3"), "((1 + 2) * 3)");
    assert_eq!(printed("2 * 3 ^ 2"), "(2 * (3 ^ 2))");
}

#[test]
fn left_associative_operators() {
    assert_eq!(printed("1 - 2 - 3"), "((1 - 2) - 3)");
    assert_eq!(printed("8 / 4 / 2"), "((8 / 4) / 2)");
    assert_eq!(printed("1 + 2 - 3"), "((1 + 2) - 3)");
}

#[test]
fn power_is_right_associative() {
    assert_eq!(printed("2 ^ 3 ^ 2"), "(2 ^ (3 ^ 2))");
}

#[test]
fn prefix_operators_bind_tightest() {
    assert_eq!(printed("-3 ^ 2"), "(-(3) ^ 2)");
    assert_eq!(printed("$9 * 2"), "($(9) * 2)");
    assert_eq!(printed("--3"), "-(-(3))");
    assert_eq!(printed("-(3 ^ 2)"), "-((3 ^ 2))");
    assert_eq!(printed("2 - -3"), "(2 - -(3))");
}

#[test]
fn implicit_multiplication() {
    assert_eq!(printed("2 3"), "(2 * 3)");
    assert_eq!(printed("2(3 + 4)"), "(2 * (3 + 4))");
    assert_eq!(printed("2pi"), "(2 * pi)");
    assert_eq!(printed("2e"), "(2 * e)");
    assert_eq!(printed("3x"), "(3 * x)");
    assert_eq!(printed("(1)(2)"), "(1 * 2)");
    assert_eq!(printed("2$9"), "(2 * $(9))");
}

#[test]
fn implicit_multiplication_binds_tighter_than_explicit() {
    assert_eq!(printed("1 / 2x"), "(1 / (2 * x))");
    assert_eq!(printed("2x ^ 2"), "(2 * (x ^ 2))");
    assert_eq!(printed("1 + 2 3"), "(1 + (2 * 3))");
    assert_eq!(printed("2 3 4"), "((2 * 3) * 4)");
}

#[test]
fn minus_after_an_operand_is_subtraction() {
    assert_eq!(printed("2 -3"), "(2 - 3)");
}

#[test]
fn missing_closing_parenthesis() {
    let err = parse_error("(1 + 2");
    assert_eq!(err, ParseError::ExpectedClosingParen { line: 1 });
    assert!(err.to_string().contains("Group missing closing parenthesis ')'"));

    assert!(matches!(parse_error("((1)"), ParseError::ExpectedClosingParen { .. }));
}

#[test]
fn unexpected_token_in_prefix_position() {
    assert_eq!(parse_error("* 2"),
               ParseError::UnexpectedToken { token: "*".to_string(),
                                             line:  1, });
    assert_eq!(parse_error(""),
               ParseError::UnexpectedToken { token: "EOF".to_string(),
                                             line:  1, });
    assert!(matches!(parse_error("1 +"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("()"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("= 1"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn equals_is_not_an_operator() {
    let err = parse_error("x = 1");
    assert_eq!(err,
               ParseError::UnrecognizedOperator { token: "=".to_string(),
                                                  line:  1, });
    assert_eq!(err.to_string(), "Unrecognized operator: '=' (line 1)");
}

#[test]
fn unmatched_closing_parenthesis_is_trailing_input() {
    assert_eq!(parse_error("1 + 2)"),
               ParseError::UnexpectedTrailingTokens { token: ")".to_string(),
                                                      line:  1, });
}

#[test]
fn errors_carry_the_line_of_the_token() {
    let tokens = scan_tokens("1 +\n\n*").unwrap();
    let err = parse_tokens(&tokens).unwrap_err();
    assert_eq!(err.line(), 3);
}

#[test]
fn deep_nesting_is_an_error_not_a_crash() {
    let source = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH * 2), ")".repeat(MAX_NESTING_DEPTH * 2));
    assert!(matches!(parse_error(&source), ParseError::NestingTooDeep { .. }));

    let source = "-".repeat(MAX_NESTING_DEPTH * 2) + "1";
    assert!(matches!(parse_error(&source), ParseError::NestingTooDeep { .. }));

    let shallow = format!("{}1{}", "(".repeat(50), ")".repeat(50));
    assert_eq!(printed(&shallow), "1");
}

#[test]
fn binding_power_table() {
    let power = |kind| infix_binding_power(kind).unwrap().1;

    assert_eq!(power(TokenKind::Plus), power(TokenKind::Minus));
    assert_eq!(power(TokenKind::Star), power(TokenKind::Slash));
    assert!(power(TokenKind::Plus).left < power(TokenKind::Star).left);
    assert!(power(TokenKind::Star).left < IMPLICIT_MULTIPLICATION.left);
    assert!(IMPLICIT_MULTIPLICATION.left < power(TokenKind::Caret).left);

    for (_, _, operator_power) in INFIX_OPERATORS {
        assert!(operator_power.left < PREFIX_BINDING_POWER);
    }
    assert!(!power(TokenKind::Caret).is_left_associative());
}

#[test]
fn implicit_operand_starters() {
    for kind in [TokenKind::Number,
                 TokenKind::Ident,
                 TokenKind::OpenParen,
                 TokenKind::Pi,
                 TokenKind::E,
                 TokenKind::Sqrt]
    {
        assert!(starts_implicit_operand(kind), "{kind} should start an operand");
    }
    for kind in [TokenKind::Minus, TokenKind::CloseParen, TokenKind::Equals, TokenKind::Eof] {
        assert!(!starts_implicit_operand(kind), "{kind} should not start an operand");
    }
}

#[test]
fn overlong_lines_are_rejected() {
    let source = vec!["1"; MAX_TOKENS].join("+");
    assert!(matches!(parse_error(&source), ParseError::TooManyTokens { .. }));

    // `MAX_TOKENS / 2` operands and the operators between them, plus `Eof`.
    let source = vec!["1"; MAX_TOKENS / 2].join("+");
    assert_eq!(parse(&source).unwrap().line_number(), 1);
}

#[test]
fn overlong_input_reports_the_line_past_the_limit() {
    let first = vec!["1"; 10].join(" ");
    let second = vec!["2"; MAX_TOKENS].join(" ");
    let source = format!("{first}\n{second}");

    let err = parse_error(&source);
    assert!(matches!(err, ParseError::TooManyTokens { limit: MAX_TOKENS, line: 2, .. }));
    assert_eq!(err.line(), 2);
    assert!(err.to_string().ends_with("(line 2)"));
}
