//! Authority component.
//!
//! ```abnf
//! authority = [ userinfo "@" ] host [ ":" port ]
//! userinfo  = *( unreserved / pct-encoded / sub-delims / ":" )
//! port      = *DIGIT
//! ```

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::chars::is_userinfo_char;
use crate::constants::MAX_PORT;
use crate::cursor::{Cursor, Span};
use crate::error::{ParseError, ParseErrorKind};
use crate::host::{self, HostKind};
use crate::percent::decode_validated;

/// The `//`-introduced part of a URI: optional userinfo, host, optional port.
///
/// The host is kept exactly as written; an IPv6 literal keeps its brackets.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::{Authority, HostKind};
///
/// let auth = Authority::parse("user:pw@192.0.2.16:80").unwrap();
/// assert_eq!(auth.userinfo(), Some("user:pw"));
/// assert_eq!(auth.host(), "192.0.2.16");
/// assert!(matches!(auth.host_kind(), HostKind::Ipv4(_)));
/// assert_eq!(auth.port(), Some(80));
///
/// let auth = Authority::parse("[::1]").unwrap();
/// assert_eq!(auth.host(), "[::1]");
/// assert!(auth.port().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Authority {
    userinfo: Option<String>,
    host: String,
    host_kind: HostKind,
    port: Option<u16>,
}

impl Authority {
    /// Parses a bare authority, as found between `//` and the path.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the host or port is malformed, a percent-encoding
    /// is invalid, or characters remain after the port.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut cursor = Cursor::new(input);
        let authority = scan(&mut cursor)?;
        cursor.expect_end()?;
        Ok(authority)
    }

    /// Returns the userinfo (without the trailing `@`), if present.
    #[must_use]
    pub fn userinfo(&self) -> Option<&str> {
        self.userinfo.as_deref()
    }

    /// Returns the percent-decoded userinfo, if present.
    #[must_use]
    pub fn decoded_userinfo(&self) -> Option<Cow<'_, [u8]>> {
        self.userinfo.as_deref().map(decode_validated)
    }

    /// Returns the host as written, including brackets for IPv6 literals.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns which kind of host this is.
    #[must_use]
    pub const fn host_kind(&self) -> &HostKind {
        &self.host_kind
    }

    /// Returns the port, if one was given.
    ///
    /// `None` means the scheme's default port applies; an empty port such as
    /// `example.com:` is also reported as `None`.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns true if the host is `localhost` or a loopback address.
    #[must_use]
    pub fn is_localhost(&self) -> bool {
        match &self.host_kind {
            HostKind::RegName => self.host.eq_ignore_ascii_case("localhost"),
            HostKind::Ipv4(ip) => ip.is_loopback(),
            HostKind::Ipv6(ip) => ip.is_loopback(),
        }
    }
}

/// Scans `[ userinfo "@" ] host [ ":" port ]` after the `//`.
pub(crate) fn scan(cursor: &mut Cursor<'_>) -> Result<Authority, ParseError> {
    let userinfo = scan_userinfo(cursor)?.map(|span| cursor.slice(span).to_string());
    let (host_span, host_kind) = host::scan(cursor)?;
    let host = cursor.slice(host_span).to_string();
    let port = scan_port(cursor)?;

    Ok(Authority {
        userinfo,
        host,
        host_kind,
        port,
    })
}

/// Looks ahead for an `@` before the end of the authority.
///
/// The userinfo is taken only when its run ends exactly at that `@`;
/// otherwise the cursor is left untouched and the host scanner takes over.
fn scan_userinfo(cursor: &mut Cursor<'_>) -> Result<Option<Span>, ParseError> {
    let rest = cursor.rest();
    let end = rest
        .iter()
        .position(|&b| matches!(b, b'/' | b'?' | b'#'))
        .unwrap_or(rest.len());
    let Some(at) = rest[..end].iter().position(|&b| b == b'@') else {
        return Ok(None);
    };

    let mut probe = *cursor;
    let span = probe.scan_encoded(is_userinfo_char)?;
    if span.end != cursor.pos() + at {
        return Ok(None);
    }
    probe.advance(1);
    *cursor = probe;
    Ok(Some(span))
}

fn scan_port(cursor: &mut Cursor<'_>) -> Result<Option<u16>, ParseError> {
    if !cursor.eat(b':') {
        return Ok(None);
    }
    let digits = cursor.scan(|b| b.is_ascii_digit());
    if digits.is_empty() {
        return Ok(None);
    }

    let mut value: u32 = 0;
    for &d in cursor.slice(digits).as_bytes() {
        value = value * 10 + u32::from(d - b'0');
        if value > u32::from(MAX_PORT) {
            return Err(cursor.error_at(ParseErrorKind::PortOutOfRange, digits.start));
        }
    }
    u16::try_from(value)
        .map(Some)
        .map_err(|_| cursor.error_at(ParseErrorKind::PortOutOfRange, digits.start))
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(userinfo) = &self.userinfo {
            write!(f, "{userinfo}@")?;
        }
        f.write_str(&self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

impl FromStr for Authority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Authority {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
