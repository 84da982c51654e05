//! Errors raised by the calculator.
//!
//! Syntax errors (missing `)`, no number where one was expected, leftover
//! input) and evaluation errors (division by zero, unknown names) share one
//! type: evaluation happens while parsing, so both surface from the same
//! call.

use crate::{cursor::Span, diagnostics::Diagnostic};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The right operand of `/` evaluated to exactly zero.
    #[error("Division by zero")]
    DivisionByZero { span: Span },

    /// A name in call position that is not a builtin function.
    #[error("Unknown function: {name}")]
    UnknownFunction { name: String, span: Span },

    /// A name outside call position with no binding.
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String, span: Span },

    /// A `(` (grouping or call) that is never closed.
    #[error("Missing closing parenthesis")]
    MissingClosingParenthesis { span: Span },

    /// Factor position held no digit, identifier or `(`.
    #[error("Expected number, found {found}")]
    ExpectedNumber { found: String, span: Span },

    /// A digit run that does not form a number, such as a lone `.`.
    #[error("Invalid number literal '{text}'")]
    InvalidNumber { text: String, span: Span },

    /// Input left over after a complete statement.
    #[error("Unexpected input: {found}")]
    UnexpectedInput { found: String, span: Span },

    /// The left side of `=` is not a variable name.
    #[error("Invalid assignment target '{target}'")]
    InvalidAssignmentTarget { target: String, span: Span },

    /// Nesting went deeper than the configured limit.
    #[error("Expression nesting depth exceeds maximum of {max_depth} levels")]
    DepthExceeded { max_depth: usize, span: Span },
}

impl CalcError {
    pub fn span(&self) -> &Span {
        use CalcError::*;
        match self {
            DivisionByZero { span }
            | UnknownFunction { span, .. }
            | UndefinedVariable { span, .. }
            | MissingClosingParenthesis { span }
            | ExpectedNumber { span, .. }
            | InvalidNumber { span, .. }
            | UnexpectedInput { span, .. }
            | InvalidAssignmentTarget { span, .. }
            | DepthExceeded { span, .. } => span,
        }
    }

    /// Convert to a Diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        use CalcError::*;
        let span = self.span().clone();
        let message = self.to_string();
        match self {
            DivisionByZero { .. } => {
                Diagnostic::new("C001", message, span).with_help("The divisor evaluated to 0")
            }
            UnknownFunction { .. } => Diagnostic::new("C002", message, span)
                .with_help("Available functions: sin, cos, tan, sqrt, log, log10"),
            UndefinedVariable { name, .. } => Diagnostic::new("C003", message, span)
                .with_help(format!("Assign it first, e.g. `{} = 1`", name)),
            MissingClosingParenthesis { .. } => Diagnostic::new("C004", message, span)
                .with_help("Add the missing ')'"),
            ExpectedNumber { .. } => Diagnostic::new("C005", message, span)
                .with_help("Write negative numbers as `0 - 1` and exponents as `1 * 10^5`"),
            InvalidNumber { .. } => Diagnostic::new("C006", message, span),
            UnexpectedInput { .. } => Diagnostic::new("C007", message, span)
                .with_help("Join values with an operator; exponent notation is written `1 * 10^5`"),
            InvalidAssignmentTarget { .. } => Diagnostic::new("C008", message, span)
                .with_help("Variable names start with a letter, e.g. `x = 5`"),
            DepthExceeded { .. } => Diagnostic::new("C009", message, span)
                .with_help("Reduce nesting or simplify the expression"),
        }
    }
}

impl From<CalcError> for Diagnostic {
    fn from(err: CalcError) -> Self {
        err.to_diagnostic()
    }
}
