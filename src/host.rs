//! Host component of an authority.
//!
//! # Grammar Reference
//!
//! ```abnf
//! host        = IP-literal / IPv4address / reg-name
//! IP-literal  = "[" IPv6address "]"
//! IPv4address = dec-octet "." dec-octet "." dec-octet "." dec-octet
//! reg-name    = *( unreserved / pct-encoded / sub-delims )
//!
//! IPv6address =                            6( h16 ":" ) ls32
//!             /                       "::" 5( h16 ":" ) ls32
//!             / [               h16 ] "::" 4( h16 ":" ) ls32
//!             / [ *1( h16 ":" ) h16 ] "::" 3( h16 ":" ) ls32
//!             / [ *2( h16 ":" ) h16 ] "::" 2( h16 ":" ) ls32
//!             / [ *3( h16 ":" ) h16 ] "::"    h16 ":"   ls32
//!             / [ *4( h16 ":" ) h16 ] "::"              ls32
//!             / [ *5( h16 ":" ) h16 ] "::"              h16
//!             / [ *6( h16 ":" ) h16 ] "::"
//! h16         = 1*4HEXDIG
//! ls32        = ( h16 ":" h16 ) / IPv4address
//! ```
//!
//! `IPvFuture` literals and RFC 6874 zone identifiers are not accepted.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::chars::{is_hexdig, is_reg_name_char};
use crate::cursor::{Cursor, Span};
use crate::error::{ParseError, ParseErrorKind};

/// Classification of a host.
///
/// The host text itself is kept by [`Authority`](crate::Authority); this
/// records which grammar alternative it matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HostKind {
    /// A registered name such as `www.ietf.org`, possibly empty
    RegName,
    /// A dotted-quad IPv4 address such as `192.0.2.16`
    Ipv4(Ipv4Addr),
    /// A bracketed IPv6 literal such as `[2001:db8::7]`
    Ipv6(Ipv6Addr),
}

impl HostKind {
    /// Returns true for IPv4 and IPv6 hosts.
    #[must_use]
    pub const fn is_ip(&self) -> bool {
        matches!(self, Self::Ipv4(_) | Self::Ipv6(_))
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegName => f.write_str("registered name"),
            Self::Ipv4(_) => f.write_str("IPv4 address"),
            Self::Ipv6(_) => f.write_str("IPv6 literal"),
        }
    }
}

/// Scans a host and classifies it.
///
/// The returned span of an IPv6 literal includes both brackets.
pub(crate) fn scan(cursor: &mut Cursor<'_>) -> Result<(Span, HostKind), ParseError> {
    if cursor.peek() == Some(b'[') {
        return scan_ip_literal(cursor);
    }

    let span = cursor.scan_encoded(is_reg_name_char)?;
    let kind = parse_ipv4(cursor.slice(span).as_bytes()).map_or(HostKind::RegName, HostKind::Ipv4);
    Ok((span, kind))
}

fn scan_ip_literal(cursor: &mut Cursor<'_>) -> Result<(Span, HostKind), ParseError> {
    let start = cursor.pos();
    let invalid = || cursor.error_at(ParseErrorKind::InvalidIPv6Literal, start);

    let rest = cursor.rest();
    let close = rest.iter().position(|&b| b == b']').ok_or_else(invalid)?;
    let addr = parse_ipv6(&rest[1..close]).ok_or_else(invalid)?;

    cursor.advance(close + 1);
    let span = Span {
        start,
        end: cursor.pos(),
    };
    Ok((span, HostKind::Ipv6(addr)))
}

/// Parses an exact `IPv4address`; leading zeros are rejected.
pub(crate) fn parse_ipv4(s: &[u8]) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut parts = s.split(|&b| b == b'.');
    for octet in &mut octets {
        *octet = parse_dec_octet(parts.next()?)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}

// dec-octet = DIGIT / %x31-39 DIGIT / "1" 2DIGIT / "2" %x30-34 DIGIT / "25" %x30-35
fn parse_dec_octet(s: &[u8]) -> Option<u8> {
    if s.is_empty() || s.len() > 3 || !s.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if s.len() > 1 && s[0] == b'0' {
        return None;
    }
    let value = s
        .iter()
        .fold(0u16, |acc, &d| acc * 10 + u16::from(d - b'0'));
    u8::try_from(value).ok()
}

/// Parses the content of an IPv6 literal (without brackets).
pub(crate) fn parse_ipv6(s: &[u8]) -> Option<Ipv6Addr> {
    let mut segs = [0u16; 8];

    match find_ellipsis(s) {
        None => {
            if read_groups(s, &mut segs)? != 8 {
                return None;
            }
        }
        Some(at) => {
            let (head, tail) = (&s[..at], &s[at + 2..]);
            if find_ellipsis(tail).is_some() {
                return None;
            }

            let mut head_segs = [0u16; 8];
            let head_len = if head.is_empty() {
                0
            } else {
                read_groups_no_v4(head, &mut head_segs)?
            };
            let mut tail_segs = [0u16; 8];
            let tail_len = if tail.is_empty() {
                0
            } else {
                read_groups(tail, &mut tail_segs)?
            };

            // "::" stands for at least one zero group.
            if head_len + tail_len > 7 {
                return None;
            }
            segs[..head_len].copy_from_slice(&head_segs[..head_len]);
            segs[8 - tail_len..].copy_from_slice(&tail_segs[..tail_len]);
        }
    }

    Some(Ipv6Addr::from(segs))
}

fn find_ellipsis(s: &[u8]) -> Option<usize> {
    s.windows(2).position(|w| w == b"::")
}

/// Reads `h16 *( ":" h16 )` where the last piece may be an `IPv4address`.
///
/// Returns the number of 16-bit groups written.
fn read_groups(s: &[u8], out: &mut [u16; 8]) -> Option<usize> {
    let mut n = 0;
    let mut pieces = s.split(|&b| b == b':').peekable();
    while let Some(piece) = pieces.next() {
        let is_last = pieces.peek().is_none();
        if is_last && piece.contains(&b'.') {
            let [a, b, c, d] = parse_ipv4(piece)?.octets();
            if n + 2 > 8 {
                return None;
            }
            out[n] = u16::from_be_bytes([a, b]);
            out[n + 1] = u16::from_be_bytes([c, d]);
            n += 2;
        } else {
            if n == 8 {
                return None;
            }
            out[n] = parse_h16(piece)?;
            n += 1;
        }
    }
    Some(n)
}

fn read_groups_no_v4(s: &[u8], out: &mut [u16; 8]) -> Option<usize> {
    if s.contains(&b'.') {
        return None;
    }
    read_groups(s, out)
}

fn parse_h16(s: &[u8]) -> Option<u16> {
    if s.is_empty() || s.len() > 4 || !s.iter().copied().all(is_hexdig) {
        return None;
    }
    let text = std::str::from_utf8(s).ok()?;
    u16::from_str_radix(text, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_str(input: &str) -> Result<(String, HostKind, usize), ParseError> {
        let mut cursor = Cursor::new(input);
        let (span, kind) = scan(&mut cursor)?;
        Ok((cursor.slice(span).to_string(), kind, cursor.pos()))
    }

    #[test]
    fn scans_reg_name() {
        let (host, kind, pos) = scan_str("www.ietf.org/rfc").unwrap();
        assert_eq!(host, "www.ietf.org");
        assert_eq!(kind, HostKind::RegName);
        assert_eq!(pos, 12);
    }

    #[test]
    fn scans_ipv4() {
        let (host, kind, _) = scan_str("192.0.2.16:80").unwrap();
        assert_eq!(host, "192.0.2.16");
        assert_eq!(kind, HostKind::Ipv4(Ipv4Addr::new(192, 0, 2, 16)));
    }

    #[test]
    fn ipv4_lookalikes_are_reg_names() {
        for input in ["1.2.3", "1.2.3.4.5", "256.0.0.1", "01.2.3.4", "1.2.3.4a"] {
            let (_, kind, _) = scan_str(input).unwrap();
            assert_eq!(kind, HostKind::RegName, "{input}");
        }
    }

    #[test]
    fn scans_ipv6_with_brackets() {
        let (host, kind, pos) = scan_str("[2001:db8::7]/c=GB").unwrap();
        assert_eq!(host, "[2001:db8::7]");
        assert_eq!(
            kind,
            HostKind::Ipv6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 7))
        );
        assert_eq!(pos, 13);
    }

    #[test]
    fn reg_name_allows_pct_and_sub_delims() {
        let (host, _, _) = scan_str("ex%41mple!$&'()*+,;=.com:").unwrap();
        assert_eq!(host, "ex%41mple!$&'()*+,;=.com");
    }

    #[test]
    fn reg_name_bad_pct_fails() {
        let err = scan_str("ex%4").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidPercentEncoding);
        assert_eq!(err.offset, Some(2));
    }

    #[test]
    fn empty_reg_name() {
        let (host, kind, _) = scan_str("/etc").unwrap();
        assert_eq!(host, "");
        assert_eq!(kind, HostKind::RegName);
    }

    #[test]
    fn missing_bracket_fails() {
        let err = scan_str("[::1/").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidIPv6Literal);
        assert_eq!(err.offset, Some(0));
    }

    #[test]
    fn ipv_future_is_rejected() {
        let err = scan_str("[v1.fe80::a]").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidIPv6Literal);
    }

    #[test]
    fn valid_ipv6_forms() {
        for (input, expected) in [
            ("::", Ipv6Addr::UNSPECIFIED),
            ("::1", Ipv6Addr::LOCALHOST),
            ("1::", Ipv6Addr::new(1, 0, 0, 0, 0, 0, 0, 0)),
            ("1:2:3:4:5:6:7:8", Ipv6Addr::new(1, 2, 3, 4, 5, 6, 7, 8)),
            ("1:2:3:4:5:6::8", Ipv6Addr::new(1, 2, 3, 4, 5, 6, 0, 8)),
            ("1::2:3", Ipv6Addr::new(1, 0, 0, 0, 0, 0, 2, 3)),
            ("FFFF::abcd", Ipv6Addr::new(0xffff, 0, 0, 0, 0, 0, 0, 0xabcd)),
            (
                "::ffff:192.0.2.1",
                Ipv6Addr::new(0, 0, 0, 0, 0, 0xffff, 0xc000, 0x0201),
            ),
            (
                "1:2:3:4:5:6:1.2.3.4",
                Ipv6Addr::new(1, 2, 3, 4, 5, 6, 0x0102, 0x0304),
            ),
        ] {
            assert_eq!(parse_ipv6(input.as_bytes()), Some(expected), "{input}");
        }
    }

    #[test]
    fn invalid_ipv6_forms() {
        for input in [
            "",
            ":",
            ":::",
            "1:2:3:4:5:6:7",
            "1:2:3:4:5:6:7:8:9",
            "1:2:3:4::5:6:7:8",
            "1::2::3",
            ":1:2:3:4:5:6:7",
            "1:2:3:4:5:6:7:",
            "12345::",
            "g::",
            "1.2.3.4::",
            "::1.2.3",
            "::01.2.3.4",
            "1:2:3:4:5:6:7:1.2.3.4",
            "fe80::1%25eth0",
        ] {
            assert_eq!(parse_ipv6(input.as_bytes()), None, "{input}");
        }
    }

    #[test]
    fn dec_octets() {
        assert_eq!(parse_ipv4(b"0.0.0.0"), Some(Ipv4Addr::UNSPECIFIED));
        assert_eq!(parse_ipv4(b"255.255.255.255"), Some(Ipv4Addr::BROADCAST));
        assert_eq!(parse_ipv4(b"255.0.0.00"), None);
        assert_eq!(parse_ipv4(b"255.0..1"), None);
    }
}
