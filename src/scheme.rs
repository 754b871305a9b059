//! Scheme component.
//!
//! ```abnf
//! scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::chars::is_scheme_char;
use crate::constants::default_port;
use crate::cursor::{Cursor, Span};
use crate::error::{ParseError, ParseErrorKind};

/// A validated URI scheme, normalized to lowercase.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::Scheme;
///
/// let scheme = Scheme::parse("HTTP").unwrap();
/// assert_eq!(scheme.as_str(), "http");
/// assert_eq!(scheme.default_port(), Some(80));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scheme(String);

impl Scheme {
    /// Parses a bare scheme (without the trailing `:`).
    ///
    /// # Errors
    ///
    /// Returns `EmptyScheme` if the input does not start with a letter and
    /// `UnexpectedTrailingInput` at the first character outside the scheme alphabet.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut cursor = Cursor::new(input);
        let span = scan_name(&mut cursor)?;
        cursor.expect_end()?;
        Ok(Self::from_span(&cursor, span))
    }

    /// Returns the scheme as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the well-known default port of this scheme, if any.
    #[must_use]
    pub fn default_port(&self) -> Option<u16> {
        default_port(&self.0)
    }

    fn from_span(cursor: &Cursor<'_>, span: Span) -> Self {
        Self(cursor.slice(span).to_ascii_lowercase())
    }
}

/// Scans `scheme ":"`, leaving the cursor after the colon.
pub(crate) fn scan(cursor: &mut Cursor<'_>) -> Result<Scheme, ParseError> {
    let span = scan_name(cursor)?;
    if !cursor.eat(b':') {
        return Err(cursor.error(ParseErrorKind::IncompleteScheme));
    }
    Ok(Scheme::from_span(cursor, span))
}

/// Probes for `scheme ":"` without reporting errors.
///
/// Used to choose between the URI and relative-reference forms.
pub(crate) fn try_scan(cursor: &mut Cursor<'_>) -> Option<Scheme> {
    let mut probe = *cursor;
    let scheme = scan(&mut probe).ok()?;
    *cursor = probe;
    Some(scheme)
}

fn scan_name(cursor: &mut Cursor<'_>) -> Result<Span, ParseError> {
    if !cursor.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
        return Err(cursor.error(ParseErrorKind::EmptyScheme));
    }
    Ok(cursor.scan(is_scheme_char))
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Scheme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Scheme {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Scheme {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Deref for Scheme {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<str> for Scheme {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Scheme {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialOrd for Scheme {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheme {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_str(input: &str) -> Result<(Scheme, usize), ParseError> {
        let mut cursor = Cursor::new(input);
        let scheme = scan(&mut cursor)?;
        Ok((scheme, cursor.pos()))
    }

    #[test]
    fn scans_scheme_and_colon() {
        let (scheme, pos) = scan_str("http://example.com").unwrap();
        assert_eq!(scheme, "http");
        assert_eq!(pos, 5);
    }

    #[test]
    fn lowercases() {
        let (scheme, _) = scan_str("HtTp:").unwrap();
        assert_eq!(scheme.as_str(), "http");
    }

    #[test]
    fn allows_plus_minus_dot_digits() {
        let (scheme, _) = scan_str("svn+ssh:").unwrap();
        assert_eq!(scheme, "svn+ssh");
        let (scheme, _) = scan_str("coap-tcp.v2:").unwrap();
        assert_eq!(scheme, "coap-tcp.v2");
    }

    #[test]
    fn missing_colon_is_incomplete() {
        let err = scan_str("http").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::IncompleteScheme);
        assert_eq!(err.offset, Some(4));
        assert_eq!(err.description(), "Incomplete scheme.");
    }

    #[test]
    fn foreign_char_is_incomplete() {
        let err = scan_str("ht_tp:").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::IncompleteScheme);
        assert_eq!(err.offset, Some(2));
    }

    #[test]
    fn leading_digit_is_empty_scheme() {
        let err = scan_str("1http:").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EmptyScheme);
        assert_eq!(err.offset, Some(0));
    }

    #[test]
    fn empty_input_is_empty_scheme() {
        let err = scan_str("").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EmptyScheme);
    }

    #[test]
    fn leading_colon_is_empty_scheme() {
        let err = scan_str(":foo").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EmptyScheme);
    }

    #[test]
    fn try_scan_leaves_cursor_on_failure() {
        let mut cursor = Cursor::new("a/b:c");
        assert!(try_scan(&mut cursor).is_none());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn parse_bare_scheme() {
        assert_eq!(Scheme::parse("URN").unwrap(), "urn");
        let err = Scheme::parse("urn:").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedTrailingInput);
        assert_eq!(err.offset, Some(3));
    }
}
