//! Main URI type.

use std::fmt;
use std::str::FromStr;

use crate::authority::Authority;
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::fragment::Fragment;
use crate::parser::Tail;
use crate::path::Path;
use crate::query::Query;
use crate::scheme::Scheme;

/// A parsed and validated absolute URI.
///
/// # Structure
///
/// ```text
/// scheme ":" ["//" authority] path ["?" query] ["#" fragment]
/// ```
///
/// Component strings are kept as written (percent-encoded); only the scheme
/// is normalized to lowercase. A `Uri` is immutable once parsed.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::Uri;
///
/// let uri = Uri::parse("ldap://[2001:db8::7]/c=GB?objectClass?one").unwrap();
/// assert_eq!(uri.scheme(), "ldap");
/// assert_eq!(uri.authority().unwrap().host(), "[2001:db8::7]");
/// assert_eq!(uri.path(), "/c=GB");
/// assert_eq!(uri.query().unwrap(), "objectClass?one");
///
/// let uri = Uri::parse("mailto:John.Doe@example.com").unwrap();
/// assert!(uri.authority().is_none());
/// assert_eq!(uri.path(), "John.Doe@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    scheme: Scheme,
    authority: Option<Authority>,
    path: Path,
    query: Option<Query>,
    fragment: Option<Fragment>,
}

impl Uri {
    /// Parses a URI from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` describing the first grammar violation, e.g.
    /// `IncompleteScheme` for `"http"` or `PortOutOfRange` for `"http://h:70000/"`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        ParserConfig::default().parse(input)
    }

    pub(crate) fn from_parts(scheme: Scheme, tail: Tail) -> Self {
        debug_assert!(tail.authority.is_some() || !tail.path.starts_with("//"));
        Self {
            scheme,
            authority: tail.authority,
            path: tail.path,
            query: tail.query,
            fragment: tail.fragment,
        }
    }

    /// Returns the lowercase scheme.
    #[must_use]
    pub const fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Returns the authority, present only if the input had `//` after the scheme.
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

    /// Returns the explicit port, or the scheme's well-known default.
    ///
    /// # Examples
    ///
    /// ```
    /// use rfc3986_uri::Uri;
    ///
    /// assert_eq!(Uri::parse("http://example.com/").unwrap().port_or_default(), Some(80));
    /// assert_eq!(Uri::parse("telnet://192.0.2.16:8023/").unwrap().port_or_default(), Some(8023));
    /// assert_eq!(Uri::parse("tel:+1-816-555-1212").unwrap().port_or_default(), None);
    /// ```
    #[must_use]
    pub fn port_or_default(&self) -> Option<u16> {
        self.authority
            .as_ref()
            .and_then(Authority::port)
            .or_else(|| self.scheme.default_port())
    }

    /// Returns true if the URI has no authority and its path does not start
    /// with `/`, as with `mailto:`, `tel:` or `urn:`.
    #[must_use]
    pub fn has_opaque_path(&self) -> bool {
        self.authority.is_none() && !self.path.is_absolute()
    }

    /// Returns the URI without its fragment, as a string.
    #[must_use]
    pub fn without_fragment(&self) -> String {
        let mut out = self.to_string();
        if let Some(fragment) = &self.fragment {
            out.truncate(out.len() - fragment.len() - 1);
        }
        out
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme)?;
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

impl FromStr for Uri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
