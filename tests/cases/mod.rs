//! Shared `test_case!` macro for the integration tests.
//!
//! ```ignore
//! test_case!(name, input: "TRUE && FALSE", boolean: Ok(false));
//! test_case!(name, input: "(TRUE", bool_error: BoolExprError::MismatchedParentheses { .. });
//! test_case!(name, input: "2 + 3", value: Ok(5.0));
//! test_case!(name, input: "5 / 0", error: CalcError::DivisionByZero { .. });
//! ```
//!
//! Calculator cases run against a fresh variable mapping.

#[macro_export]
macro_rules! test_case {
    ($name:ident, input: $input:expr, boolean: $expected:expr $(,)?) => {
        #[test]
        fn $name() {
            let parser = uexpr::BoolExprParser::new();
            let expected: Result<bool, uexpr::BoolExprError> = $expected;
            pretty_assertions::assert_eq!(parser.evaluate($input), expected, "input: {}", $input);
            let flag = match &expected {
                Ok(value) => (true, *value),
                Err(_) => (false, false),
            };
            pretty_assertions::assert_eq!(parser.evaluate_flag($input), flag, "input: {}", $input);
        }
    };

    ($name:ident, input: $input:expr, bool_error: $pattern:pat $(,)?) => {
        #[test]
        fn $name() {
            let parser = uexpr::BoolExprParser::new();
            let result = parser.evaluate($input);
            assert!(
                matches!(result, Err($pattern)),
                "input: {}, got {:?}",
                $input,
                result
            );
            pretty_assertions::assert_eq!(parser.evaluate_flag($input), (false, false));
        }
    };

    ($name:ident, input: $input:expr, value: $expected:expr $(,)?) => {
        #[test]
        fn $name() {
            let mut vars = std::collections::HashMap::<String, f64>::new();
            let expected: Result<f64, uexpr::CalcError> = $expected;
            pretty_assertions::assert_eq!(
                uexpr::calculator::evaluate($input, &mut vars),
                expected,
                "input: {}",
                $input
            );
        }
    };

    ($name:ident, input: $input:expr, error: $pattern:pat $(,)?) => {
        #[test]
        fn $name() {
            let mut vars = std::collections::HashMap::<String, f64>::new();
            let result = uexpr::calculator::evaluate($input, &mut vars);
            assert!(
                matches!(result, Err($pattern)),
                "input: {}, got {:?}",
                $input,
                result
            );
        }
    };
}
