//! Single-pass recursive-descent expression evaluators.
//!
//! - [`boolean`]: `TRUE`/`FALSE` logic with `!`, `&&`, `||` and grouping.
//! - [`calculator`]: floating-point arithmetic with variables, builtin
//!   functions and assignment.
//!
//! Neither evaluator tokenizes or builds a tree: productions read straight
//! from a [`cursor::Cursor`] and fold values as they go. Every evaluation
//! must consume its whole input to succeed.

pub mod boolean;
pub mod calculator;
pub mod cursor;
pub mod diagnostics;
pub mod options;
pub mod variables;

pub use boolean::{BoolExprError, BoolExprParser};
pub use calculator::{Builtin, CalcError, Calculator};
pub use cursor::Span;
pub use diagnostics::Diagnostic;
pub use options::EvaluatorOptions;
pub use variables::Variables;
