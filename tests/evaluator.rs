use prattle::{
    Error, evaluate, evaluate_line,
    error::RuntimeError,
    interpreter::{lexer::scan_tokens, parser::core::parse_tokens},
    parse, print,
};

fn value(source: &str) -> f64 {
    let tree = parse(source).unwrap_or_else(|e| panic!("{source:?} failed to parse: {e}"));
    evaluate(&tree).unwrap_or_else(|e| panic!("{source:?} failed to evaluate: {e}"))
}

fn runtime_error(source: &str) -> RuntimeError {
    match evaluate_line(source) {
        Err(Error::Runtime(e)) => e,
        other => panic!("{source:?} should fail at runtime, got {other:?}"),
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() <= 1e-12 * expected.abs().max(1.0),
            "expected {expected}, got {actual}");
}

#[test]
fn numeric_literals_evaluate_to_their_value() {
    for literal in ["0", "7", "42", "007", "3.14", "0.5", "2.50", "123456789.000001"] {
        assert_eq!(value(literal), literal.parse::<f64>().unwrap(), "{literal}");
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(value("1 + 2 * 3"), 7.0);
    assert_eq!(value("(1 + 2) * 3"), 9.0);
    assert_eq!(value("1 - 2 - 3"), -4.0);
    assert_eq!(value("8 / 4 / 2"), 1.0);
    assert_eq!(value("2 ^ 3 ^ 2"), 512.0);
    assert_eq!(value("10 - 4 / 2"), 8.0);
}

#[test]
fn prefix_operators() {
    assert_eq!(value("-3 ^ 2"), 9.0);
    assert_eq!(value("-(3 ^ 2)"), -9.0);
    assert_eq!(value("$9"), 3.0);
    assert_eq!(value("$16 + 1"), 5.0);
    assert_eq!(value("--4"), 4.0);
    assert_eq!(value("2 - -3"), 5.0);
}

#[test]
fn implicit_multiplication() {
    assert_eq!(value("2(3 + 4)"), 14.0);
    assert_eq!(value("2 3"), 6.0);
    assert_eq!(value("(2)(5)"), 10.0);
    assert_eq!(value("2$9"), 6.0);
    assert_eq!(value("1 / 2(2)"), 0.25);
}

#[test]
fn keyword_constants() {
    assert_close(value("pi"), 3.141_592_653_589_79);
    assert_close(value("e"), std::f64::consts::E);
    assert_close(value("2pi"), std::f64::consts::TAU);
    assert_close(value("e ^ 2"), std::f64::consts::E * std::f64::consts::E);
}

#[test]
fn fractional_and_negative_exponents() {
    assert_eq!(value("4 ^ 0.5"), 2.0);
    assert_eq!(value("2 ^ -1"), 0.5);
    assert!(value("(-8) ^ (1 / 3)").is_nan());
}

#[test]
fn square_root_of_a_negative_is_nan() {
    assert!(value("$(-4)").is_nan());
    assert!(evaluate_line("$(0 - 1)").unwrap().value.is_nan());
}

#[test]
fn division_by_zero_fails_after_parsing() {
    let tree = parse("5/0").unwrap();
    assert_eq!(evaluate(&tree), Err(RuntimeError::DivisionByZero { line: 1 }));

    assert!(matches!(runtime_error("1 / (2 - 2)"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("1 / -0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("0 / 0"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn identifiers_have_no_value() {
    assert_eq!(runtime_error("3x"),
               RuntimeError::UnknownIdentifier { name: "x".to_string(),
                                                 line: 1, });
    assert!(matches!(runtime_error("inf"), RuntimeError::UnknownIdentifier { .. }));
    assert!(matches!(runtime_error("nan"), RuntimeError::UnknownIdentifier { .. }));
}

#[test]
fn first_error_wins() {
    assert!(matches!(runtime_error("x / 0"), RuntimeError::UnknownIdentifier { .. }));
    assert!(matches!(runtime_error("1 / 0 + x"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn outcome_carries_printed_form_and_value() {
    let outcome = evaluate_line("1+2*3").unwrap();
    assert_eq!(outcome.printed, "(1 + (2 * 3))");
    assert_eq!(outcome.value, 7.0);

    let outcome = evaluate_line("$9").unwrap();
    assert_eq!(outcome.printed, "$(9)");
    assert_eq!(outcome.value, 3.0);
}

#[test]
fn printed_form_parses_back_to_the_same_value() {
    let sources = ["1 + 2 * 3",
                   "(1 + 2) * 3",
                   "1 - 2 - 3",
                   "-3 ^ 2",
                   "-(3 ^ 2)",
                   "2 ^ 3 ^ 2",
                   "2(3 + 4)",
                   "2 3 4",
                   "1 / 2(2)",
                   "$9 + $16",
                   "2$9",
                   "--3",
                   "2 - -3 * -4",
                   "pi e",
                   "2pi ^ 2",
                   "4 ^ 0.5 / 3",
                   "((((7))))",
                   "$(-4)",
                   "1.25 * 8 - 0.5"];

    for source in sources {
        let tree = parse(source).unwrap();
        let printed = print(&tree);

        let tokens = scan_tokens(&printed).unwrap();
        let reparsed = parse_tokens(&tokens).unwrap_or_else(|e| panic!("{printed:?}: {e}"));

        // Printing is idempotent.
        assert_eq!(print(&reparsed), printed, "{source}");

        let original = evaluate(&tree).unwrap();
        let again = evaluate(&reparsed).unwrap();
        assert!(original == again || (original.is_nan() && again.is_nan()),
                "{source}: {original} != {again}");
    }
}

#[test]
fn longest_lines_evaluate_on_a_default_thread() {
    use prattle::interpreter::parser::core::MAX_TOKENS;

    // Adjacent operands and `+` chains both grow the left spine of the tree.
    let adjacent = vec!["1"; MAX_TOKENS - 1].join(" ");
    let chained = vec!["1"; MAX_TOKENS / 2].join(" + ");

    let handle = std::thread::spawn(move || {
                     let adjacent = evaluate_line(&adjacent).unwrap();
                     let chained = evaluate_line(&chained).unwrap();
                     (adjacent, chained)
                 });
    let (adjacent, chained) = handle.join().expect("evaluation thread crashed");

    assert_eq!(adjacent.value, 1.0);
    let innermost = "(".repeat(MAX_TOKENS - 2) + "1 * 1)";
    assert!(adjacent.printed.starts_with(&innermost));
    assert_eq!(chained.value, (MAX_TOKENS / 2) as f64);

    let over = vec!["1"; MAX_TOKENS].join(" ");
    let rejected = std::thread::spawn(move || evaluate_line(&over).is_err()).join()
                                                                         .expect("parsing thread crashed");
    assert!(rejected);
}
