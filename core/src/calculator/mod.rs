//! Arithmetic expression evaluator ("calculator").
//!
//! Evaluates floating-point expressions with `+ - * /`, right-associative
//! `^`, parentheses, the builtin functions `sin cos tan sqrt log log10`, and
//! named variables stored in a caller-owned mapping. A statement of the form
//! `name = expression` evaluates the right side, binds it, and returns it.
//!
//! ## Design Principles
//!
//! - **Caller owns the state**: the engine itself is stateless; variables
//!   live in whatever [`Variables`] store the caller lends it.
//! - **No partial writes**: an assignment is stored only once its right side
//!   has evaluated and the whole input was consumed.
//! - **No silent infinities**: dividing by zero is an error, not `inf`.
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use uexpr_core::calculator::{CalcError, Calculator};
//!
//! let mut vars: HashMap<String, f64> = HashMap::new();
//! let mut calc = Calculator::new(&mut vars);
//!
//! assert_eq!(calc.evaluate("x = 5"), Ok(5.0));
//! assert_eq!(calc.evaluate("x * 2"), Ok(10.0));
//! assert_eq!(calc.evaluate("2^3^2"), Ok(512.0));
//! assert!(matches!(calc.evaluate("5 / 0"), Err(CalcError::DivisionByZero { .. })));
//!
//! assert_eq!(vars["x"], 5.0);
//! ```

mod builtins;
mod error;
mod parser;

#[cfg(test)]
mod parser_test;

pub use builtins::{Builtin, UnknownBuiltin};
pub use error::CalcError;

use crate::{
    options::EvaluatorOptions,
    variables::{Variables, seed_constants},
};

/// Evaluator bound to a caller's variable mapping.
///
/// Construction seeds `pi` and `e` into the mapping when they are absent.
/// The mapping stays borrowed for the calculator's lifetime, so evaluations
/// through one calculator are naturally serialized.
pub struct Calculator<'v, V: Variables + ?Sized> {
    variables: &'v mut V,
    options: EvaluatorOptions,
}

impl<'v, V: Variables + ?Sized> Calculator<'v, V> {
    pub fn new(variables: &'v mut V) -> Self {
        Self::with_options(variables, EvaluatorOptions::default())
    }

    pub fn with_options(variables: &'v mut V, options: EvaluatorOptions) -> Self {
        seed_constants(variables);
        Self { variables, options }
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    pub fn variables(&self) -> &V {
        &*self.variables
    }

    /// Evaluate one statement.
    ///
    /// For `name = expression` the value is also stored under `name`.
    pub fn evaluate(&mut self, expression: &str) -> Result<f64, CalcError> {
        let statement = match parser::evaluate(expression, &*self.variables, &self.options) {
            Ok(statement) => statement,
            Err(err) => {
                tracing::debug!(
                    expression,
                    offset = err.span().0.start,
                    "failed to evaluate the expression: {}",
                    err
                );
                return Err(err);
            }
        };

        if let Some(target) = statement.target {
            tracing::trace!(name = target, value = statement.value, "assigning variable");
            self.variables.set(target, statement.value);
        }
        tracing::trace!(expression, value = statement.value, "evaluated expression");
        Ok(statement.value)
    }
}

/// Evaluate `expression` once against `variables` with default options.
pub fn evaluate<V: Variables + ?Sized>(expression: &str, variables: &mut V) -> Result<f64, CalcError> {
    Calculator::new(variables).evaluate(expression)
}
