//! Unit tests for the calculator grammar and its variable handling.

use super::*;
use crate::cursor::Span;
use pretty_assertions::assert_eq;
use std::collections::HashMap;

type Vars = HashMap<String, f64>;

fn eval(input: &str) -> Result<f64, CalcError> {
    crate::test_utils::init_test_logging();
    let mut vars = Vars::new();
    evaluate(input, &mut vars)
}

fn approx(input: &str, expected: f64) {
    let value = eval(input).unwrap_or_else(|e| panic!("{} failed: {}", input, e));
    assert!(
        (value - expected).abs() < 1e-9,
        "{} = {}, expected {}",
        input,
        value,
        expected
    );
}

#[test]
fn test_basic_arithmetic() {
    assert_eq!(eval("2 + 3 * 4"), Ok(14.0));
    assert_eq!(eval("10 / 2 + 6"), Ok(11.0));
    assert_eq!(eval("8 - 3 * 2"), Ok(2.0));
    assert_eq!(eval("1.5 + .5"), Ok(2.0));
    assert_eq!(eval("7."), Ok(7.0));
}

#[test]
fn test_parentheses_and_order() {
    assert_eq!(eval("2 * (3 + 4)"), Ok(14.0));
    assert_eq!(eval("(2 + 3) * (4 + 1)"), Ok(25.0));
    assert_eq!(eval("( ( 1 ) )"), Ok(1.0));
}

#[test]
fn test_left_associativity() {
    assert_eq!(eval("10 - 4 - 3"), Ok(3.0));
    assert_eq!(eval("64 / 4 / 2"), Ok(8.0));
}

#[test]
fn test_power_is_right_associative() {
    assert_eq!(eval("2^3^2"), Ok(512.0));
    assert_eq!(eval("(2^3)^2"), Ok(64.0));
    assert_eq!(eval("2 * 3^2"), Ok(18.0));
    assert_eq!(eval("2 ^ 0.5 ^ 2"), eval("2 ^ 0.25"));
}

#[test]
fn test_power_follows_ieee() {
    assert_eq!(eval("4^0.5"), Ok(2.0));
    assert_eq!(eval("2^(0-1)"), Ok(0.5));
    assert!(eval("(0-8)^0.5").unwrap().is_nan());
}

#[test]
fn test_functions() {
    assert_eq!(eval("sqrt(16)"), Ok(4.0));
    assert_eq!(eval("sin(0)"), Ok(0.0));
    assert_eq!(eval("sqrt (9) + 1"), Ok(4.0));
    approx("log(e)", 1.0);
    approx("log10(1000)", 3.0);
    approx("cos(pi)", -1.0);
    approx("tan(pi / 4)", 1.0);
}

#[test]
fn test_constants_are_seeded() {
    approx("pi", std::f64::consts::PI);
    approx("e", std::f64::consts::E);
}

#[test]
fn test_complex_expressions() {
    approx("3 + 4 * 2 / (1 - 5)^2", 3.5);
    approx("sqrt(16) + log(e^2)", 6.0);
    approx("sin(pi / 2) + cos(0)", 2.0);
    approx("(2 + 3) * (7 - 4)^2", 45.0);
    approx("(1 + 2) * (3 + 4) / (5 - 2)", 7.0);
    approx("sqrt((3 + 5)^2 + (12 - 4)^2)", 128f64.sqrt());
    approx("(2 + 3 * (4 + 5)) / (7 - 2)", 5.8);
    approx(
        "(pi^2 + e^2) / (1 + sin(0))",
        std::f64::consts::PI.powi(2) + std::f64::consts::E.powi(2),
    );
}

#[test]
fn test_assignment_persists() {
    let mut vars = Vars::new();
    let mut calc = Calculator::new(&mut vars);
    assert_eq!(calc.evaluate("x = 5"), Ok(5.0));
    assert_eq!(calc.evaluate("x * 2"), Ok(10.0));
    assert_eq!(calc.evaluate("  y   = x + 3"), Ok(8.0));
    assert_eq!(calc.evaluate("x = x + 1"), Ok(6.0));
    assert_eq!(vars.get("x"), Some(&6.0));
    assert_eq!(vars.get("y"), Some(&8.0));
}

#[test]
fn test_assignment_across_calculators() {
    let mut vars = Vars::new();
    assert_eq!(evaluate("rate_2 = 0.25", &mut vars), Ok(0.25));
    assert_eq!(evaluate("rate_2 * 8", &mut vars), Ok(2.0));
}

#[test]
fn test_redefined_constants_are_kept() {
    let mut vars = Vars::new();
    assert_eq!(evaluate("e = 2^3^2", &mut vars), Ok(512.0));
    assert_eq!(evaluate("e", &mut vars), Ok(512.0));
    assert_eq!(evaluate("pi", &mut vars), Ok(std::f64::consts::PI));
}

#[test]
fn test_failed_assignment_writes_nothing() {
    let mut vars = Vars::new();
    assert!(evaluate("x = 1 / 0", &mut vars).is_err());
    assert!(evaluate("x = 1 +", &mut vars).is_err());
    assert!(evaluate("x = 1 1", &mut vars).is_err());
    assert_eq!(vars.get("x"), None);
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        eval("5 / 0"),
        Err(CalcError::DivisionByZero {
            span: Span::new(2, 3)
        })
    );
    assert!(matches!(
        eval("1 / (2 - 2)"),
        Err(CalcError::DivisionByZero { .. })
    ));
    assert!(matches!(
        eval("1 / (0 * (0 - 1))"),
        Err(CalcError::DivisionByZero { .. })
    ));
    assert_eq!(eval("0 / 5"), Ok(0.0));
}

#[test]
fn test_unknown_function() {
    assert_eq!(
        eval("unknownFunc(2)"),
        Err(CalcError::UnknownFunction {
            name: "unknownFunc".to_string(),
            span: Span::new(0, 11),
        })
    );
    assert!(matches!(
        eval("Sin(0)"),
        Err(CalcError::UnknownFunction { .. })
    ));
}

#[test]
fn test_undefined_variable() {
    assert_eq!(
        eval("z + 2"),
        Err(CalcError::UndefinedVariable {
            name: "z".to_string(),
            span: Span::new(0, 1),
        })
    );
    assert!(matches!(eval("PI"), Err(CalcError::UndefinedVariable { .. })));
    // A builtin name outside call position is just a variable name.
    assert!(matches!(
        eval("sqrt + 1"),
        Err(CalcError::UndefinedVariable { .. })
    ));
}

#[test]
fn test_missing_closing_parenthesis() {
    assert_eq!(
        eval("2 * (3 + 4"),
        Err(CalcError::MissingClosingParenthesis {
            span: Span::new(4, 5)
        })
    );
    assert_eq!(
        eval("sqrt(16"),
        Err(CalcError::MissingClosingParenthesis {
            span: Span::new(4, 5)
        })
    );
}

#[test]
fn test_expected_number() {
    assert_eq!(
        eval(""),
        Err(CalcError::ExpectedNumber {
            found: "end of input".to_string(),
            span: Span::at(0),
        })
    );
    // No unary minus.
    assert_eq!(
        eval("-3"),
        Err(CalcError::ExpectedNumber {
            found: "'-'".to_string(),
            span: Span::new(0, 1),
        })
    );
    assert!(matches!(eval("2 * "), Err(CalcError::ExpectedNumber { .. })));
    assert!(matches!(eval("_x"), Err(CalcError::ExpectedNumber { .. })));
}

#[test]
fn test_invalid_number() {
    assert_eq!(
        eval("1 + ."),
        Err(CalcError::InvalidNumber {
            text: ".".to_string(),
            span: Span::new(4, 5),
        })
    );
}

#[test]
fn test_trailing_input_fails() {
    assert_eq!(
        eval("2 3"),
        Err(CalcError::UnexpectedInput {
            found: "'3'".to_string(),
            span: Span::new(2, 3),
        })
    );
    assert!(matches!(eval("1.2.3"), Err(CalcError::UnexpectedInput { .. })));
    assert!(matches!(eval("(1))"), Err(CalcError::UnexpectedInput { .. })));
    assert!(matches!(eval("x = 1 = 2"), Err(CalcError::UnexpectedInput { .. })));
}

#[test]
fn test_invalid_assignment_target() {
    assert_eq!(
        eval(" 2x = 1"),
        Err(CalcError::InvalidAssignmentTarget {
            target: "2x".to_string(),
            span: Span::new(1, 3),
        })
    );
    assert_eq!(
        eval("= 1"),
        Err(CalcError::InvalidAssignmentTarget {
            target: String::new(),
            span: Span::new(0, 1),
        })
    );
    assert!(matches!(
        eval("a + b = 1"),
        Err(CalcError::InvalidAssignmentTarget { .. })
    ));
}

#[test]
fn test_evaluation_is_idempotent() {
    let mut vars = Vars::new();
    let mut calc = Calculator::new(&mut vars);
    calc.evaluate("k = 3").unwrap();
    let first = calc.evaluate("k^2 + sqrt(k)");
    assert_eq!(calc.evaluate("k^2 + sqrt(k)"), first);
}

#[test]
fn test_depth_limit() {
    let mut vars = Vars::new();
    let mut calc = Calculator::with_options(&mut vars, EvaluatorOptions::with_max_depth(2));
    assert_eq!(calc.options().max_depth, Some(2));
    assert_eq!(calc.evaluate("((1))"), Ok(1.0));
    assert_eq!(
        calc.evaluate("(((1)))"),
        Err(CalcError::DepthExceeded {
            max_depth: 2,
            span: Span::new(2, 3),
        })
    );
    assert!(matches!(
        calc.evaluate("2^2^2^2"),
        Err(CalcError::DepthExceeded { .. })
    ));
}

#[test]
fn test_other_variable_stores() {
    let mut tree = std::collections::BTreeMap::<String, f64>::new();
    assert_eq!(evaluate("n = 2 * pi", &mut tree), Ok(2.0 * std::f64::consts::PI));

    let mut brown = hashbrown::HashMap::<String, f64>::new();
    assert_eq!(evaluate("r = 4", &mut brown), Ok(4.0));
    assert_eq!(evaluate("r / 2", &mut brown), Ok(2.0));
}

#[test]
fn test_diagnostics() {
    let diag = eval("5 / 0").unwrap_err().to_diagnostic();
    assert_eq!(diag.code, "C001");
    assert_eq!(diag.message, "Division by zero");

    let diag = eval("foo").unwrap_err().to_diagnostic();
    assert_eq!(diag.code, "C003");
    assert_eq!(diag.help.as_deref(), Some("Assign it first, e.g. `foo = 1`"));
}

#[test]
fn test_unsupported_literal_forms_get_help() {
    let diag = eval("2^-1").unwrap_err().to_diagnostic();
    assert_eq!(diag.code, "C005");
    assert!(diag.help.as_deref().is_some_and(|help| help.contains("10^5")));

    // `1e5` reads as `1` followed by stray input.
    let err = eval("1e5").unwrap_err();
    assert_eq!(
        err,
        CalcError::UnexpectedInput {
            found: "'e'".to_string(),
            span: Span::new(1, 3),
        }
    );
    let diag = err.to_diagnostic();
    assert!(diag.help.as_deref().is_some_and(|help| help.contains("10^5")));
}
