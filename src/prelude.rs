//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use rfc3986_uri::prelude::*;
//!
//! let uri: Uri = parse("news:comp.infosystems.www.servers.unix").unwrap();
//! assert_eq!(uri.scheme(), "news");
//! ```

pub use crate::{
    // Entry points
    parse, parse_reference, ParserConfig,
    // Core types
    Authority, Fragment, HostKind, Path, Query, RelativeRef, Scheme, Uri, UriRef,
    // Errors
    ParseError, ParseErrorKind,
};
