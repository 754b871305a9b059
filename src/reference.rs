//! URI references: a URI or a relative reference.
//!
//! Only [`parse_reference`](crate::parse_reference) produces these;
//! [`parse`](crate::parse) always requires a scheme. Resolving a relative
//! reference against a base URI is left to the caller.

use std::fmt;
use std::str::FromStr;

use crate::authority::Authority;
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::fragment::Fragment;
use crate::parser::Tail;
use crate::path::Path;
use crate::query::Query;
use crate::uri::Uri;

/// A relative reference: a URI without a scheme.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::{parse_reference, UriRef};
///
/// let UriRef::Relative(rel) = parse_reference("//example.com/a?b").unwrap() else {
///     panic!("expected a relative reference");
/// };
/// assert_eq!(rel.authority().unwrap().host(), "example.com");
/// assert_eq!(rel.path(), "/a");
/// assert_eq!(rel.query().unwrap(), "b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativeRef {
    authority: Option<Authority>,
    path: Path,
    query: Option<Query>,
    fragment: Option<Fragment>,
}

impl RelativeRef {
    pub(crate) fn from_tail(tail: Tail) -> Self {
        Self {
            authority: tail.authority,
            path: tail.path,
            query: tail.query,
            fragment: tail.fragment,
        }
    }

    /// Returns the authority, if the reference starts with `//`.
    #[must_use]
    pub const fn authority(&self) -> Option<&Authority> {
        self.authority.as_ref()
    }

    /// Returns the path, possibly empty.
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the query (without `?`), if present.
    #[must_use]
    pub const fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    /// Returns the fragment (without `#`), if present.
    #[must_use]
    pub const fn fragment(&self) -> Option<&Fragment> {
        self.fragment.as_ref()
    }
}

impl fmt::Display for RelativeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(authority) = &self.authority {
            write!(f, "//{authority}")?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

/// Either an absolute URI or a relative reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UriRef {
    /// The input started with `scheme ":"`
    Uri(Uri),
    /// The input had no scheme
    Relative(RelativeRef),
}

impl UriRef {
    /// Parses a URI reference from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` describing the first grammar violation.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        ParserConfig::default().parse_reference(input)
    }

    /// Returns the URI if this reference has a scheme.
    #[must_use]
    pub const fn as_uri(&self) -> Option<&Uri> {
        match self {
            Self::Uri(uri) => Some(uri),
            Self::Relative(_) => None,
        }
    }

    /// Returns true if this is a relative reference.
    #[must_use]
    pub const fn is_relative(&self) -> bool {
        matches!(self, Self::Relative(_))
    }

    /// Returns the authority, if present.
    #[must_use]
    pub const fn authority(&self) -> Option<&Authority> {
        match self {
            Self::Uri(uri) => uri.authority(),
            Self::Relative(rel) => rel.authority(),
        }
    }

    /// Returns the path, possibly empty.
    #[must_use]
    pub const fn path(&self) -> &Path {
        match self {
            Self::Uri(uri) => uri.path(),
            Self::Relative(rel) => rel.path(),
        }
    }

    /// Returns the query, if present.
    #[must_use]
    pub const fn query(&self) -> Option<&Query> {
        match self {
            Self::Uri(uri) => uri.query(),
            Self::Relative(rel) => rel.query(),
        }
    }

    /// Returns the fragment, if present.
    #[must_use]
    pub const fn fragment(&self) -> Option<&Fragment> {
        match self {
            Self::Uri(uri) => uri.fragment(),
            Self::Relative(rel) => rel.fragment(),
        }
    }
}

impl From<Uri> for UriRef {
    fn from(uri: Uri) -> Self {
        Self::Uri(uri)
    }
}

impl From<RelativeRef> for UriRef {
    fn from(rel: RelativeRef) -> Self {
        Self::Relative(rel)
    }
}

impl fmt::Display for UriRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uri(uri) => fmt::Display::fmt(uri, f),
            Self::Relative(rel) => fmt::Display::fmt(rel, f),
        }
    }
}

impl FromStr for UriRef {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for UriRef {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UriRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UriRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
