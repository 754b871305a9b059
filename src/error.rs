//! Error types for URI parsing.

use std::fmt;

/// Error returned when a URI, URI reference, or bare component fails to parse.
///
/// The error always describes the first grammar violation met while scanning
/// left to right, so parsing the same input twice yields the same error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
    /// Zero-based byte offset where scanning failed, when known
    pub offset: Option<usize>,
}

/// Specific parsing error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The first character of the input is not an ASCII letter
    EmptyScheme,
    /// Scheme characters were consumed but no terminating `:` was found
    IncompleteScheme,
    /// A `%` is not followed by two hexadecimal digits
    InvalidPercentEncoding,
    /// Malformed content between `[` and `]`, or the `]` is missing
    InvalidIPv6Literal,
    /// The port does not fit in 0-65535
    PortOutOfRange,
    /// Characters remain that the grammar does not admit at this position
    UnexpectedTrailingInput,
    /// Input exceeds the length limit set in [`ParserConfig`](crate::ParserConfig)
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
}

impl ParseErrorKind {
    /// Returns the stable, human-readable description of this kind.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::EmptyScheme => "Empty scheme.",
            Self::IncompleteScheme => "Incomplete scheme.",
            Self::InvalidPercentEncoding => "Invalid percent encoding.",
            Self::InvalidIPv6Literal => "Invalid IPv6 literal.",
            Self::PortOutOfRange => "Port out of range.",
            Self::UnexpectedTrailingInput => "Unexpected trailing input.",
            Self::TooLong { .. } => "Input too long.",
        }
    }
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind, offset: Option<usize>) -> Self {
        Self {
            input: input.to_string(),
            kind,
            offset,
        }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the stable description of the error kind, e.g. `"Incomplete scheme."`.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.kind.description()
    }

    /// Returns the byte offset where scanning failed, if available.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        self.offset
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': ", self.input)?;
        match (&self.kind, self.offset) {
            (ParseErrorKind::TooLong { max, actual }, _) => {
                write!(f, "length {actual} exceeds maximum {max}")
            }
            (kind, Some(offset)) => {
                let found = self.input.get(offset..).and_then(|rest| rest.chars().next());
                match found {
                    Some(c) => write!(
                        f,
                        "{} (found {c:?} at offset {offset})",
                        kind.description()
                    ),
                    None => write!(f, "{} (at end of input)", kind.description()),
                }
            }
            (kind, None) => f.write_str(kind.description()),
        }
    }
}

impl std::error::Error for ParseError {}
