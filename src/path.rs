//! Path component.
//!
//! ```abnf
//! path-abempty  = *( "/" segment )
//! path-absolute = "/" [ segment-nz *( "/" segment ) ]
//! path-rootless = segment-nz *( "/" segment )
//! path-noscheme = segment-nz-nc *( "/" segment )
//! path-empty    = 0<pchar>
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::chars::{is_path_char, is_segment_nz_nc_char};
use crate::cursor::{Cursor, Span};
use crate::error::ParseError;
use crate::percent::decode_validated;

/// Which path production the grammar allows at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathKind {
    /// After an authority: empty, or starting with `/`.
    AbEmpty,
    /// After a scheme without authority: absolute, rootless or empty.
    General,
    /// Relative reference without authority: a colon may not appear
    /// before the first `/`.
    NoScheme,
}

/// A validated URI path, possibly empty.
///
/// The path keeps its raw, percent-encoded text. For schemes without an
/// authority such as `mailto:` or `urn:` it holds the whole scheme-specific part.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::Path;
///
/// let path = Path::parse("/rfc/rfc2396.txt").unwrap();
/// assert!(path.is_absolute());
/// assert_eq!(path.segments().collect::<Vec<_>>(), ["rfc", "rfc2396.txt"]);
///
/// let path = Path::parse("John.Doe@example.com").unwrap();
/// assert!(!path.is_absolute());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path(String);

impl Path {
    /// Parses a bare path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPercentEncoding` for a malformed `%HH` triplet and
    /// `UnexpectedTrailingInput` at the first character that cannot appear in a
    /// path (including `?` and `#`).
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut cursor = Cursor::new(input);
        let path = scan(&mut cursor, PathKind::General)?;
        cursor.expect_end()?;
        Ok(path)
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the path starts with `/`.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.0.starts_with('/')
    }

    /// Returns an iterator over the `/`-separated segments.
    ///
    /// The leading `/` of an absolute path does not produce an empty first
    /// segment; an empty path yields no segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        let rest = self.0.strip_prefix('/').unwrap_or(&self.0);
        rest.split('/').filter(move |_| !self.0.is_empty())
    }

    /// Returns the percent-decoded path bytes.
    #[must_use]
    pub fn decode(&self) -> Cow<'_, [u8]> {
        decode_validated(&self.0)
    }
}

/// Scans the path production allowed by `kind`. Never fails on grammar
/// grounds: an empty path is legal and the driver rejects what is left over.
pub(crate) fn scan(cursor: &mut Cursor<'_>, kind: PathKind) -> Result<Path, ParseError> {
    let span = match kind {
        PathKind::AbEmpty if cursor.peek() != Some(b'/') => Span {
            start: cursor.pos(),
            end: cursor.pos(),
        },
        PathKind::NoScheme if cursor.peek() != Some(b'/') => {
            let first = cursor.scan_encoded(is_segment_nz_nc_char)?;
            if cursor.peek() == Some(b'/') {
                let rest = cursor.scan_encoded(is_path_char)?;
                Span {
                    start: first.start,
                    end: rest.end,
                }
            } else {
                first
            }
        }
        _ => cursor.scan_encoded(is_path_char)?,
    };
    Ok(Path(cursor.slice(span).to_string()))
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Path {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Deref for Path {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Path {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}
