//! Forward-only scanning over the source text.
//!
//! There is no tokenization pass: grammar productions consume characters
//! straight from a [`Cursor`], skipping whitespace lazily where they start.

use core::ops::Range;

/// A byte range into the evaluated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }

    /// Zero-width span at `pos`.
    pub fn at(pos: usize) -> Self {
        Self(pos..pos)
    }

    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
}

/// Read-only view over one evaluation's input with an advancing position.
///
/// The position never moves backwards. A cursor lives for a single
/// `evaluate` call.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// Cursor over `source[offset..]` that reports positions relative to the
    /// whole of `source`.
    pub fn starting_at(source: &'src str, offset: usize) -> Self {
        Self {
            source,
            pos: offset.min(source.len()),
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unconsumed remainder of the input.
    pub fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    /// Consumes `prefix` if the remainder starts with it, exactly as spelled.
    pub fn eat(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    /// Consumes one char if it satisfies `pred`.
    pub fn eat_char(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        let c = self.peek().filter(|&c| pred(c))?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes the longest run of chars satisfying `pred` and returns it.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'src str {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(rest.len(), |(i, _)| i);
        self.pos += len;
        &rest[..len]
    }

    /// Span from `start` up to the current position.
    pub fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.pos)
    }

    /// Human-readable description of the next char, for error messages.
    pub fn describe_next(&self) -> String {
        match self.peek() {
            Some(c) => format!("'{}'", c),
            None => "end of input".to_string(),
        }
    }

    /// Span covering the next char, or a zero-width span at the end.
    pub fn next_char_span(&self) -> Span {
        let len = self.peek().map_or(0, char::len_utf8);
        Span::new(self.pos, self.pos + len)
    }
}
