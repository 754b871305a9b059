//! Constants for URI validation.

/// Largest accepted port number.
///
/// RFC 3986 puts no ceiling on `*DIGIT`; ports are bounded to the TCP/UDP range.
pub const MAX_PORT: u16 = u16::MAX;

/// Suggested input length limit for [`ParserConfig::with_max_length`](crate::ParserConfig::with_max_length).
///
/// Matches the common interoperability limit for URIs in HTTP implementations.
pub const DEFAULT_MAX_LENGTH: usize = 8000;

/// Well-known default ports, keyed by lowercase scheme.
pub(crate) const DEFAULT_PORTS: &[(&str, u16)] = &[
    ("ftp", 21),
    ("http", 80),
    ("https", 443),
    ("ldap", 389),
    ("ldaps", 636),
    ("ssh", 22),
    ("telnet", 23),
    ("ws", 80),
    ("wss", 443),
];

/// Returns the well-known default port for a lowercase scheme.
#[must_use]
pub fn default_port(scheme: &str) -> Option<u16> {
    DEFAULT_PORTS
        .iter()
        .find(|(name, _)| *name == scheme)
        .map(|&(_, port)| port)
}
