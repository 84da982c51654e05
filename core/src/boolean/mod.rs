//! Boolean expression evaluator.
//!
//! Evaluates expressions over the literals `TRUE` and `FALSE`, negation `!`,
//! conjunction `&&`, disjunction `||` and parentheses. `&&` binds tighter
//! than `||`; both are left-associative. Keywords are case-sensitive.
//!
//! The grammar is implemented once and offered with two error-reporting
//! styles:
//!
//! - [`BoolExprParser::evaluate`] returns a [`BoolExprError`] describing the
//!   first problem found;
//! - [`BoolExprParser::evaluate_flag`] only reports whether evaluation
//!   succeeded.
//!
//! ## Example
//!
//! ```
//! use uexpr_core::boolean::{BoolExprError, BoolExprParser};
//!
//! let parser = BoolExprParser::new();
//! assert_eq!(parser.evaluate("TRUE || FALSE && FALSE"), Ok(true));
//! assert_eq!(parser.evaluate_flag("!(TRUE && FALSE)"), (true, true));
//!
//! // The whole input must be consumed.
//! assert!(matches!(
//!     parser.evaluate("TRUE && (FALSE || TRUE"),
//!     Err(BoolExprError::MismatchedParentheses { .. })
//! ));
//! assert_eq!(parser.evaluate_flag("TRUE FALSE"), (false, false));
//! ```

mod error;
mod parser;


pub use error::BoolExprError;

use crate::options::EvaluatorOptions;

/// Stateless evaluator for boolean expressions.
///
/// Holding one is free; every call to [`evaluate`](Self::evaluate) scans its
/// input from scratch and shares nothing with other calls.
#[derive(Debug, Clone, Default)]
pub struct BoolExprParser {
    options: EvaluatorOptions,
}

impl BoolExprParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EvaluatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Evaluate `input`, failing with a descriptive error.
    pub fn evaluate(&self, input: &str) -> Result<bool, BoolExprError> {
        let result = parser::evaluate(input, &self.options);
        match &result {
            Ok(value) => tracing::trace!(input, value, "evaluated boolean expression"),
            Err(err) => tracing::debug!(
                input,
                offset = err.span().0.start,
                "failed to evaluate the boolean expression: {}",
                err
            ),
        }
        result
    }

    /// Evaluate `input`, reporting failure only through the returned flag.
    ///
    /// Returns `(success, result)`. On failure `result` is `false` and
    /// carries no meaning.
    pub fn evaluate_flag(&self, input: &str) -> (bool, bool) {
        match self.evaluate(input) {
            Ok(value) => (true, value),
            Err(_) => (false, false),
        }
    }
}

/// Evaluate `input` with default options.
pub fn evaluate(input: &str) -> Result<bool, BoolExprError> {
    BoolExprParser::new().evaluate(input)
}
