//! Byte cursor shared by the component scanners.

use crate::chars::is_hexdig;
use crate::error::{ParseError, ParseErrorKind};

/// Half-open byte range `[start, end)` into the parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl Span {
    pub(crate) const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// Scan position within an immutable input.
///
/// # Invariants
///
/// `pos <= input.len()` and `pos` only moves forward. Every class the
/// scanners consult is ASCII-only, so `pos` always lands on a UTF-8
/// character boundary and spans can be sliced from the input directly.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub(crate) const fn input(&self) -> &'a str {
        self.input
    }

    pub(crate) const fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) const fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    pub(crate) fn peek_at(&self, i: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + i).copied()
    }

    pub(crate) fn rest(&self) -> &'a [u8] {
        &self.input.as_bytes()[self.pos..]
    }

    /// Skips `n` bytes the caller has already inspected.
    pub(crate) fn advance(&mut self, n: usize) {
        self.pos += n;
        debug_assert!(self.pos <= self.input.len());
    }

    /// Consumes `b` if it is the next byte.
    pub(crate) fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.advance(1);
            true
        } else {
            false
        }
    }

    /// Consumes `s` if the remaining input starts with it.
    pub(crate) fn eat_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s.as_bytes()) {
            self.advance(s.len());
            true
        } else {
            false
        }
    }

    /// Consumes a run of bytes in `class`, with no percent-encoding allowed.
    pub(crate) fn scan(&mut self, class: fn(u8) -> bool) -> Span {
        let start = self.pos;
        while self.peek().is_some_and(class) {
            self.advance(1);
        }
        Span {
            start,
            end: self.pos,
        }
    }

    /// Consumes a run of bytes in `class` interleaved with `%HH` triplets.
    ///
    /// Stops at the first byte outside `class` that is not `%`.
    ///
    /// # Errors
    ///
    /// `InvalidPercentEncoding` at the `%` if it is not followed by two hex digits.
    pub(crate) fn scan_encoded(&mut self, class: fn(u8) -> bool) -> Result<Span, ParseError> {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b == b'%' {
                self.eat_pct_encoded()?;
            } else if class(b) {
                self.advance(1);
            } else {
                break;
            }
        }
        Ok(Span {
            start,
            end: self.pos,
        })
    }

    /// Validates and consumes the `%HH` triplet at the cursor.
    fn eat_pct_encoded(&mut self) -> Result<(), ParseError> {
        match (self.peek_at(1), self.peek_at(2)) {
            (Some(hi), Some(lo)) if is_hexdig(hi) && is_hexdig(lo) => {
                self.advance(3);
                Ok(())
            }
            _ => Err(self.error(ParseErrorKind::InvalidPercentEncoding)),
        }
    }

    pub(crate) fn slice(&self, span: Span) -> &'a str {
        &self.input[span.start..span.end]
    }

    /// Builds an error located at the cursor.
    pub(crate) fn error(&self, kind: ParseErrorKind) -> ParseError {
        self.error_at(kind, self.pos)
    }

    pub(crate) fn error_at(&self, kind: ParseErrorKind, offset: usize) -> ParseError {
        ParseError::new(self.input, kind, Some(offset))
    }

    /// Fails with `UnexpectedTrailingInput` unless the input is exhausted.
    pub(crate) fn expect_end(&self) -> Result<(), ParseError> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::UnexpectedTrailingInput))
        }
    }
}
