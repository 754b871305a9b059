//! Query component.
//!
//! ```abnf
//! query = *( pchar / "/" / "?" )
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::chars::is_query_char;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::percent::decode_validated;

/// A validated query string, without the leading `?`.
///
/// The query is kept opaque; no key/value splitting is attempted.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::Query;
///
/// let query = Query::parse("objectClass?one").unwrap();
/// assert_eq!(query.as_str(), "objectClass?one");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Query(String);

impl Query {
    /// Parses a query string (without leading `?`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidPercentEncoding` for a malformed `%HH` triplet and
    /// `UnexpectedTrailingInput` at the first character not allowed in a query.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut cursor = Cursor::new(input);
        let query = scan_body(&mut cursor)?;
        cursor.expect_end()?;
        Ok(query)
    }

    /// Returns the query as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the percent-decoded query bytes.
    #[must_use]
    pub fn decode(&self) -> Cow<'_, [u8]> {
        decode_validated(&self.0)
    }
}

/// Scans `[ "?" query ]`, returning `None` when no `?` follows.
pub(crate) fn scan(cursor: &mut Cursor<'_>) -> Result<Option<Query>, ParseError> {
    if !cursor.eat(b'?') {
        return Ok(None);
    }
    scan_body(cursor).map(Some)
}

fn scan_body(cursor: &mut Cursor<'_>) -> Result<Query, ParseError> {
    let span = cursor.scan_encoded(is_query_char)?;
    Ok(Query(cursor.slice(span).to_string()))
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Query {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Query {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Deref for Query {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<str> for Query {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Query {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialOrd for Query {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Query {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}
