//! Recursive-descent evaluation of boolean expressions.
//!
//! Grammar, lowest binding first:
//!
//! ```text
//! expression := term ( "||" term )*
//! term       := factor ( "&&" factor )*
//! factor     := "!" factor | "(" expression ")" | "TRUE" | "FALSE"
//! ```
//!
//! Values are folded as they are parsed; no tree is built.

use crate::{
    boolean::BoolExprError,
    cursor::{Cursor, Span},
    options::EvaluatorOptions,
};

/// Parses and evaluates `source`, requiring the whole input to be consumed.
pub(crate) fn evaluate(source: &str, options: &EvaluatorOptions) -> Result<bool, BoolExprError> {
    let mut parser = Parser {
        cursor: Cursor::new(source),
        options,
        depth: 0,
    };
    let value = parser.parse_expression()?;
    parser.expect_end()?;
    Ok(value)
}

struct Parser<'src, 'opt> {
    cursor: Cursor<'src>,
    options: &'opt EvaluatorOptions,
    depth: usize,
}

impl Parser<'_, '_> {
    fn parse_expression(&mut self) -> Result<bool, BoolExprError> {
        let mut value = self.parse_term()?;
        loop {
            self.cursor.skip_whitespace();
            if !self.cursor.eat("||") {
                return Ok(value);
            }
            // Both sides are always parsed; only the fold short-circuits.
            let rhs = self.parse_term()?;
            value = value || rhs;
        }
    }

    fn parse_term(&mut self) -> Result<bool, BoolExprError> {
        let mut value = self.parse_factor()?;
        loop {
            self.cursor.skip_whitespace();
            if !self.cursor.eat("&&") {
                return Ok(value);
            }
            let rhs = self.parse_factor()?;
            value = value && rhs;
        }
    }

    fn parse_factor(&mut self) -> Result<bool, BoolExprError> {
        self.cursor.skip_whitespace();
        let start = self.cursor.position();

        if self.cursor.eat("!") {
            self.enter(start)?;
            let inner = self.parse_factor();
            self.depth -= 1;
            return inner.map(|value| !value);
        }

        if self.cursor.eat("(") {
            self.enter(start)?;
            let inner = self.parse_group(start);
            self.depth -= 1;
            return inner;
        }

        if self.cursor.eat("TRUE") {
            return Ok(true);
        }

        if self.cursor.eat("FALSE") {
            return Ok(false);
        }

        Err(self.unexpected())
    }

    /// Rest of a parenthesized group whose `(` started at `open`.
    fn parse_group(&mut self, open: usize) -> Result<bool, BoolExprError> {
        let value = self.parse_expression()?;
        self.cursor.skip_whitespace();
        if !self.cursor.eat(")") {
            return Err(BoolExprError::MismatchedParentheses {
                span: Span::new(open, open + 1),
            });
        }
        Ok(value)
    }

    fn enter(&mut self, start: usize) -> Result<(), BoolExprError> {
        self.depth += 1;
        if self.options.allows_depth(self.depth) {
            return Ok(());
        }
        self.depth -= 1;
        Err(BoolExprError::DepthExceeded {
            max_depth: self.options.max_depth.unwrap_or_default(),
            span: Span::new(start, start + 1),
        })
    }

    /// Full-consumption check at the top level.
    fn expect_end(&mut self) -> Result<(), BoolExprError> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            None => Ok(()),
            Some(')') => Err(BoolExprError::MismatchedParentheses {
                span: self.cursor.next_char_span(),
            }),
            Some(_) => Err(self.unexpected()),
        }
    }

    fn unexpected(&self) -> BoolExprError {
        BoolExprError::UnexpectedToken {
            found: self.cursor.describe_next(),
            span: self.cursor.next_char_span(),
        }
    }
}
