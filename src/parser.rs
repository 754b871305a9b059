//! Top-level recognizer.
//!
//! ```abnf
//! URI           = scheme ":" hier-part [ "?" query ] [ "#" fragment ]
//! hier-part     = "//" authority path-abempty
//!               / path-absolute / path-rootless / path-empty
//!
//! URI-reference = URI / relative-ref
//! relative-ref  = relative-part [ "?" query ] [ "#" fragment ]
//! relative-part = "//" authority path-abempty
//!               / path-absolute / path-noscheme / path-empty
//! ```
//!
//! States run strictly in order, each starting where the previous one
//! stopped: scheme, authority or path, query, fragment, end of input. The
//! first failure is returned as-is; no alternative production is tried.

use crate::authority::{self, Authority};
use crate::config::ParserConfig;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};
use crate::fragment::{self, Fragment};
use crate::path::{self, Path, PathKind};
use crate::query::{self, Query};
use crate::reference::{RelativeRef, UriRef};
use crate::scheme;
use crate::uri::Uri;

/// Everything after the scheme.
#[derive(Debug)]
pub(crate) struct Tail {
    pub(crate) authority: Option<Authority>,
    pub(crate) path: Path,
    pub(crate) query: Option<Query>,
    pub(crate) fragment: Option<Fragment>,
}

pub(crate) fn parse_uri(input: &str, config: &ParserConfig) -> Result<Uri, ParseError> {
    check_length(input, config)?;
    log::trace!("parsing URI {input:?}");

    let mut cursor = Cursor::new(input);
    scheme::scan(&mut cursor)
        .and_then(|scheme| {
            let tail = scan_tail(&mut cursor, PathKind::General)?;
            Ok(Uri::from_parts(scheme, tail))
        })
        .inspect_err(log_failure)
}

pub(crate) fn parse_reference(input: &str, config: &ParserConfig) -> Result<UriRef, ParseError> {
    check_length(input, config)?;
    log::trace!("parsing URI reference {input:?}");

    let mut cursor = Cursor::new(input);
    let result = match scheme::try_scan(&mut cursor) {
        Some(scheme) => scan_tail(&mut cursor, PathKind::General)
            .map(|tail| UriRef::Uri(Uri::from_parts(scheme, tail))),
        None => scan_tail(&mut cursor, PathKind::NoScheme)
            .map(|tail| UriRef::Relative(RelativeRef::from_tail(tail))),
    };
    result.inspect_err(log_failure)
}

fn check_length(input: &str, config: &ParserConfig) -> Result<(), ParseError> {
    match config.max_length {
        Some(max) if input.len() > max => {
            let err = ParseError::new(
                input,
                ParseErrorKind::TooLong {
                    max,
                    actual: input.len(),
                },
                None,
            );
            log_failure(&err);
            Err(err)
        }
        _ => Ok(()),
    }
}

/// Scans from just after `scheme ":"` (or from the start of a relative
/// reference) to the end of input.
///
/// `unrooted` is the path production used when there is no authority.
fn scan_tail(cursor: &mut Cursor<'_>, unrooted: PathKind) -> Result<Tail, ParseError> {
    let authority = if cursor.eat_str("//") {
        let authority = authority::scan(cursor)?;
        log::trace!(
            "authority: userinfo={:?} host={:?} port={:?}",
            authority.userinfo(),
            authority.host(),
            authority.port()
        );
        Some(authority)
    } else {
        None
    };

    let kind = if authority.is_some() {
        PathKind::AbEmpty
    } else {
        unrooted
    };
    let path = path::scan(cursor, kind)?;
    let query = query::scan(cursor)?;
    let fragment = fragment::scan(cursor)?;
    cursor.expect_end()?;

    log::trace!(
        "parsed {:?}: path={:?} query={:?} fragment={:?}",
        cursor.input(),
        path.as_str(),
        query.as_deref(),
        fragment.as_deref()
    );
    Ok(Tail {
        authority,
        path,
        query,
        fragment,
    })
}

fn log_failure(err: &ParseError) {
    log::debug!(
        "rejected {:?} at offset {:?}: {}",
        err.input,
        err.offset,
        err.kind.description()
    );
}
