//! Strict parser for Uniform Resource Identifiers as defined by RFC 3986.
//!
//! # Overview
//!
//! A URI is decomposed into its five components, validated against the
//! RFC 3986 grammar:
//!
//! ```text
//!   foo://user@example.com:8042/over/there?name=ferret#nose
//!   \_/   \__________________/\_________/ \_________/ \__/
//!    |             |              |            |        |
//! scheme       authority        path         query   fragment
//! ```
//!
//! Parsing is a single left-to-right pass. On failure the [`ParseError`]
//! names the first grammar violation and the byte offset where it was found.
//!
//! # Quick Start
//!
//! ```rust
//! use rfc3986_uri::{parse, ParseErrorKind};
//!
//! let uri = parse("telnet://192.0.2.16:80/").unwrap();
//! assert_eq!(uri.scheme(), "telnet");
//! let authority = uri.authority().unwrap();
//! assert_eq!(authority.host(), "192.0.2.16");
//! assert_eq!(authority.port(), Some(80));
//! assert_eq!(uri.path(), "/");
//!
//! // Schemes without an authority keep the whole scheme-specific part as path
//! let uri = parse("tel:+1-816-555-1212").unwrap();
//! assert!(uri.authority().is_none());
//! assert_eq!(uri.path(), "+1-816-555-1212");
//!
//! let err = parse("http").unwrap_err();
//! assert_eq!(err.kind, ParseErrorKind::IncompleteScheme);
//! assert_eq!(err.description(), "Incomplete scheme.");
//! ```
//!
//! # Relative References
//!
//! [`parse`] requires a scheme. Relative references such as `../a?b` are
//! accepted only through [`parse_reference`], which returns a [`UriRef`].
//!
//! # Choices Beyond the Grammar
//!
//! | Aspect | Behavior |
//! |--------|----------|
//! | Port | Bounded to 0-65535; larger values fail with `PortOutOfRange` |
//! | Empty port (`host:`) | Reported as no port |
//! | Case | Only the scheme is lowercased |
//! | IPv6 literal | Stored with brackets; `IPvFuture` and zone IDs are rejected |
//! | Empty host (`file:///x`) | Accepted as an empty registered name |
//! | Percent-encoding | Validated, never decoded in place |

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod authority;
mod chars;
mod config;
mod constants;
mod cursor;
mod error;
mod fragment;
mod host;
#[cfg(kani)]
mod kani_impls;
mod parser;
mod path;
mod percent;
pub mod prelude;
mod query;
mod reference;
mod scheme;
mod uri;

pub use authority::Authority;
pub use chars::{is_gen_delim, is_hexdig, is_reserved, is_sub_delim, is_unreserved};
pub use config::ParserConfig;
pub use constants::{DEFAULT_MAX_LENGTH, MAX_PORT, default_port};
pub use error::{ParseError, ParseErrorKind};
pub use fragment::Fragment;
pub use host::HostKind;
pub use path::Path;
pub use percent::percent_decode;
pub use query::Query;
pub use reference::{RelativeRef, UriRef};
pub use scheme::Scheme;
pub use uri::Uri;

/// Parses an absolute URI.
///
/// Equivalent to [`Uri::parse`].
///
/// # Errors
///
/// Returns the first grammar violation found scanning left to right.
pub fn parse(input: &str) -> Result<Uri, ParseError> {
    Uri::parse(input)
}

/// Parses a URI or a relative reference.
///
/// Equivalent to [`UriRef::parse`].
///
/// # Errors
///
/// Returns the first grammar violation found scanning left to right.
pub fn parse_reference(input: &str) -> Result<UriRef, ParseError> {
    UriRef::parse(input)
}
