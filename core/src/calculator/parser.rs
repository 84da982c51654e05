//! Recursive-descent evaluation of calculator statements.
//!
//! Grammar, lowest binding first (`^` is right-associative, everything else
//! left-associative):
//!
//! ```text
//! statement  := identifier "=" expression | expression
//! expression := term ( ("+" | "-") term )*
//! term       := power ( ("*" | "/") power )*
//! power      := factor ( "^" power )?
//! factor     := "(" expression ")" | identifier ( "(" expression ")" )? | number
//! ```
//!
//! The parser only reads variables. Storing an assignment is left to the
//! caller so that a failed evaluation never writes anything.

use crate::{
    calculator::{Builtin, CalcError},
    cursor::{Cursor, Span},
    options::EvaluatorOptions,
    variables::{Variables, is_identifier, is_identifier_continue, is_identifier_start},
};

/// Result of a successfully evaluated statement.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Statement<'src> {
    /// Variable to bind, for the assignment form.
    pub target: Option<&'src str>,
    pub value: f64,
}

pub(crate) fn evaluate<'src, V: Variables + ?Sized>(
    source: &'src str,
    variables: &V,
    options: &EvaluatorOptions,
) -> Result<Statement<'src>, CalcError> {
    // A flat split on the first `=`: there is no nested context in which an
    // `=` could mean anything else.
    let (target, body_start) = match source.find('=') {
        Some(eq) => (Some(assignment_target(source, eq)?), eq + 1),
        None => (None, 0),
    };

    let mut parser = Parser {
        cursor: Cursor::starting_at(source, body_start),
        variables,
        options,
        depth: 0,
    };
    let value = parser.parse_expression()?;
    parser.expect_end()?;
    Ok(Statement { target, value })
}

/// Trimmed left side of the `=` at `eq`, which must be a variable name.
fn assignment_target(source: &str, eq: usize) -> Result<&str, CalcError> {
    let lhs = &source[..eq];
    let target = lhs.trim();
    if is_identifier(target) {
        return Ok(target);
    }
    let start = lhs.len() - lhs.trim_start().len();
    let span = if target.is_empty() {
        Span::new(eq, eq + 1)
    } else {
        Span::new(start, start + target.len())
    };
    Err(CalcError::InvalidAssignmentTarget {
        target: target.to_string(),
        span,
    })
}

struct Parser<'src, 'a, V: ?Sized> {
    cursor: Cursor<'src>,
    variables: &'a V,
    options: &'a EvaluatorOptions,
    depth: usize,
}

impl<V: Variables + ?Sized> Parser<'_, '_, V> {
    fn parse_expression(&mut self) -> Result<f64, CalcError> {
        let mut value = self.parse_term()?;
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.eat("+") {
                value += self.parse_term()?;
            } else if self.cursor.eat("-") {
                value -= self.parse_term()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn parse_term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.parse_power()?;
        loop {
            self.cursor.skip_whitespace();
            let op_start = self.cursor.position();
            if self.cursor.eat("*") {
                value *= self.parse_power()?;
            } else if self.cursor.eat("/") {
                let divisor = self.parse_power()?;
                // Checked explicitly: IEEE division would quietly yield inf/NaN.
                if divisor == 0.0 {
                    return Err(CalcError::DivisionByZero {
                        span: Span::new(op_start, op_start + 1),
                    });
                }
                value /= divisor;
            } else {
                return Ok(value);
            }
        }
    }

    fn parse_power(&mut self) -> Result<f64, CalcError> {
        let base = self.parse_factor()?;
        self.cursor.skip_whitespace();
        let op_start = self.cursor.position();
        if !self.cursor.eat("^") {
            return Ok(base);
        }
        // Right recursion makes `^` right-associative.
        self.enter(op_start)?;
        let exponent = self.parse_power();
        self.depth -= 1;
        Ok(base.powf(exponent?))
    }

    fn parse_factor(&mut self) -> Result<f64, CalcError> {
        self.cursor.skip_whitespace();
        let start = self.cursor.position();

        if self.cursor.eat("(") {
            self.enter(start)?;
            let value = self.parse_parenthesized(start);
            self.depth -= 1;
            return value;
        }

        match self.cursor.peek() {
            Some(c) if is_identifier_start(c) => self.parse_call_or_variable(),
            _ => self.parse_number(),
        }
    }

    /// Rest of `( expression )` once the `(` at `open` is consumed.
    fn parse_parenthesized(&mut self, open: usize) -> Result<f64, CalcError> {
        let value = self.parse_expression()?;
        self.cursor.skip_whitespace();
        if !self.cursor.eat(")") {
            return Err(CalcError::MissingClosingParenthesis {
                span: Span::new(open, open + 1),
            });
        }
        Ok(value)
    }

    fn parse_call_or_variable(&mut self) -> Result<f64, CalcError> {
        let start = self.cursor.position();
        let name = self.cursor.eat_while(is_identifier_continue);
        let name_span = self.cursor.span_from(start);

        self.cursor.skip_whitespace();
        let open = self.cursor.position();
        if self.cursor.eat("(") {
            self.enter(open)?;
            let arg = self.parse_parenthesized(open);
            self.depth -= 1;
            let arg = arg?;
            let builtin: Builtin = name.parse().map_err(|_| CalcError::UnknownFunction {
                name: name.to_string(),
                span: name_span,
            })?;
            return Ok(builtin.apply(arg));
        }

        self.variables
            .get(name)
            .ok_or_else(|| CalcError::UndefinedVariable {
                name: name.to_string(),
                span: name_span,
            })
    }

    /// A maximal run of digits containing at most one `.`.
    fn parse_number(&mut self) -> Result<f64, CalcError> {
        let start = self.cursor.position();
        self.cursor.eat_while(|c| c.is_ascii_digit());
        if self.cursor.eat(".") {
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        let span = self.cursor.span_from(start);
        let text = span.str_of(self.cursor.source());
        if text.is_empty() {
            return Err(CalcError::ExpectedNumber {
                found: self.cursor.describe_next(),
                span: self.cursor.next_char_span(),
            });
        }
        text.parse().map_err(|_| CalcError::InvalidNumber {
            text: text.to_string(),
            span,
        })
    }

    fn enter(&mut self, start: usize) -> Result<(), CalcError> {
        self.depth += 1;
        if self.options.allows_depth(self.depth) {
            return Ok(());
        }
        self.depth -= 1;
        Err(CalcError::DepthExceeded {
            max_depth: self.options.max_depth.unwrap_or_default(),
            span: Span::new(start, start + 1),
        })
    }

    /// Full-consumption check at the top level.
    fn expect_end(&mut self) -> Result<(), CalcError> {
        self.cursor.skip_whitespace();
        if self.cursor.is_at_end() {
            return Ok(());
        }
        Err(CalcError::UnexpectedInput {
            found: self.cursor.describe_next(),
            span: Span::new(self.cursor.position(), self.cursor.source().len()),
        })
    }
}
