//! Errors raised by the boolean expression evaluator.

use crate::{cursor::Span, diagnostics::Diagnostic};
use thiserror::Error;

/// Why a boolean expression failed to evaluate.
///
/// The first error encountered aborts the evaluation; there is no recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoolExprError {
    /// A `(` with no matching `)`, or a `)` with no matching `(`.
    #[error("Mismatched parentheses")]
    MismatchedParentheses { span: Span },

    /// Factor position held none of `!`, `(`, `TRUE`, `FALSE`, or input was
    /// left over after a complete expression.
    #[error("Unexpected token in factor: {found}")]
    UnexpectedToken { found: String, span: Span },

    /// Nesting went deeper than the configured limit.
    #[error("Expression nesting depth exceeds maximum of {max_depth} levels")]
    DepthExceeded { max_depth: usize, span: Span },
}

impl BoolExprError {
    pub fn span(&self) -> &Span {
        match self {
            BoolExprError::MismatchedParentheses { span }
            | BoolExprError::UnexpectedToken { span, .. }
            | BoolExprError::DepthExceeded { span, .. } => span,
        }
    }

    /// Convert to a Diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let span = self.span().clone();
        match self {
            BoolExprError::MismatchedParentheses { .. } => {
                Diagnostic::new("B001", "Mismatched parentheses", span)
                    .with_help("Every '(' needs exactly one matching ')'")
            }
            BoolExprError::UnexpectedToken { found, .. } => Diagnostic::new(
                "B002",
                format!("Expected '!', '(', TRUE or FALSE, found {}", found),
                span,
            )
            .with_help("Keywords are case-sensitive: use TRUE and FALSE"),
            BoolExprError::DepthExceeded { max_depth, .. } => Diagnostic::new(
                "B003",
                format!(
                    "Expression nesting depth exceeds maximum of {} levels",
                    max_depth
                ),
                span,
            ),
        }
    }
}

impl From<BoolExprError> for Diagnostic {
    fn from(err: BoolExprError) -> Self {
        err.to_diagnostic()
    }
}
