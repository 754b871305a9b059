//! Parser configuration.

use crate::error::ParseError;
use crate::parser;
use crate::reference::UriRef;
use crate::uri::Uri;

/// Configuration for [`parse`](crate::parse) and [`parse_reference`](crate::parse_reference).
///
/// The default configuration accepts input of any length; the grammar itself
/// is never relaxed.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::{ParserConfig, ParseErrorKind, DEFAULT_MAX_LENGTH};
///
/// // "http://a.example/" is 17 bytes
/// let config = ParserConfig::new().with_max_length(17);
/// assert!(config.parse("http://a.example/").is_ok());
///
/// let err = config.parse("http://a.example/long/path").unwrap_err();
/// assert!(matches!(err.kind, ParseErrorKind::TooLong { max: 17, .. }));
///
/// let config = ParserConfig::new().with_max_length(DEFAULT_MAX_LENGTH);
/// assert_eq!(config.max_length, Some(8000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Maximum accepted input length in bytes.
    ///
    /// Longer input fails with `TooLong` before any scanning.
    /// Default: None
    pub max_length: Option<usize>,
}

impl ParserConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_length: None }
    }

    /// Sets the maximum input length.
    #[must_use]
    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Removes the input length limit.
    #[must_use]
    pub const fn without_max_length(mut self) -> Self {
        self.max_length = None;
        self
    }

    /// Parses an absolute URI (scheme required) with this configuration.
    ///
    /// # Errors
    ///
    /// Returns the first grammar violation found scanning left to right, or
    /// `TooLong` if the input exceeds [`max_length`](Self::max_length).
    pub fn parse(&self, input: &str) -> Result<Uri, ParseError> {
        parser::parse_uri(input, self)
    }

    /// Parses a URI or a relative reference with this configuration.
    ///
    /// # Errors
    ///
    /// Returns the first grammar violation found scanning left to right, or
    /// `TooLong` if the input exceeds [`max_length`](Self::max_length).
    pub fn parse_reference(&self, input: &str) -> Result<UriRef, ParseError> {
        parser::parse_reference(input, self)
    }
}
