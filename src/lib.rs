//! uexpr - Small embeddable expression evaluators
//!
//! # Overview
//!
//! Two single-pass recursive-descent evaluators:
//!
//! - a boolean evaluator over `TRUE`, `FALSE`, `!`, `&&`, `||` and parentheses;
//! - a calculator over floating-point numbers with `+ - * / ^`, the builtin
//!   functions `sin cos tan sqrt log log10`, variables and assignment.
//!
//! # Quick Start
//!
//! ```
//! use std::collections::HashMap;
//! use uexpr::{BoolExprParser, Calculator};
//!
//! assert_eq!(BoolExprParser::new().evaluate("!FALSE && TRUE"), Ok(true));
//!
//! // Variables live in a mapping the caller owns and keeps between calls.
//! let mut vars: HashMap<String, f64> = HashMap::new();
//! let mut calc = Calculator::new(&mut vars);
//! calc.evaluate("r = 2").unwrap();
//! let area = calc.evaluate("pi * r^2").unwrap();
//! assert!((area - 4.0 * std::f64::consts::PI).abs() < 1e-12);
//! ```
//!
//! # Error Reporting
//!
//! Errors carry the byte span they refer to. Convert them into a
//! [`Diagnostic`] and render them with [`render_error`] or one of its
//! variants:
//!
//! ```
//! use std::collections::HashMap;
//! use uexpr::{Diagnostic, calculator, render_error_to_string_no_color};
//!
//! let source = "2 * (3 + 4";
//! let mut vars: HashMap<String, f64> = HashMap::new();
//! let err = calculator::evaluate(source, &mut vars).unwrap_err();
//! let output = render_error_to_string_no_color(source, &Diagnostic::from(err));
//! assert!(output.contains("Missing closing parenthesis"));
//! ```

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from uexpr_core
pub use uexpr_core::{
    BoolExprError, BoolExprParser, Builtin, CalcError, Calculator, Diagnostic, EvaluatorOptions,
    Span, Variables,
};
pub use uexpr_core::{boolean, calculator, variables};
