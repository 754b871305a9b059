//! Fragment component.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::chars::is_query_char;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::percent::decode_validated;

/// A validated fragment, without the leading `#`.
///
/// Fragments use the same character set as queries.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::Fragment;
///
/// let frag = Fragment::parse("section-4.2?x").unwrap();
/// assert_eq!(frag.as_str(), "section-4.2?x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Fragment(String);

impl Fragment {
    /// Parses a fragment from a string (without leading `#`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidPercentEncoding` for a malformed `%HH` triplet and
    /// `UnexpectedTrailingInput` at the first character not allowed in a
    /// fragment, such as a second `#`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut cursor = Cursor::new(input);
        let fragment = scan_body(&mut cursor)?;
        cursor.expect_end()?;
        Ok(fragment)
    }

    /// Returns the fragment as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the percent-decoded fragment bytes.
    #[must_use]
    pub fn decode(&self) -> Cow<'_, [u8]> {
        decode_validated(&self.0)
    }
}

/// Scans `[ "#" fragment ]`, returning `None` when no `#` follows.
pub(crate) fn scan(cursor: &mut Cursor<'_>) -> Result<Option<Fragment>, ParseError> {
    if !cursor.eat(b'#') {
        return Ok(None);
    }
    scan_body(cursor).map(Some)
}

fn scan_body(cursor: &mut Cursor<'_>) -> Result<Fragment, ParseError> {
    let span = cursor.scan_encoded(is_query_char)?;
    Ok(Fragment(cursor.slice(span).to_string()))
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Fragment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Fragment {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Deref for Fragment {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<str> for Fragment {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Fragment {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialOrd for Fragment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fragment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn parse_simple_fragment() {
        let frag = Fragment::parse("summarization").unwrap();
        assert_eq!(frag.as_str(), "summarization");
    }

    #[test]
    fn parse_fragment_with_special_chars() {
        let frag = Fragment::parse("sub/path:v2@x?y=1").unwrap();
        assert_eq!(frag.as_str(), "sub/path:v2@x?y=1");
    }

    #[test]
    fn parse_empty_fragment() {
        let frag = Fragment::parse("").unwrap();
        assert_eq!(frag.as_str(), "");
    }

    #[test]
    fn second_hash_fails() {
        let err = Fragment::parse("a#b").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedTrailingInput);
        assert_eq!(err.offset, Some(1));
    }

    #[test]
    fn parse_space_fails() {
        let err = Fragment::parse("test value").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedTrailingInput);
        assert_eq!(err.offset, Some(4));
    }

    #[test]
    fn scan_consumes_hash() {
        let mut cursor = Cursor::new("#top");
        let frag = scan(&mut cursor).unwrap().unwrap();
        assert_eq!(frag, "top");
        assert!(cursor.is_at_end());
    }

    #[test]
    fn decode() {
        let frag = Fragment::parse("a%23b").unwrap();
        assert_eq!(&*frag.decode(), b"a#b");
    }
}
