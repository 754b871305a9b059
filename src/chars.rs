//! Character classes of the RFC 3986 grammar.
//!
//! ```abnf
//! unreserved  = ALPHA / DIGIT / "-" / "." / "_" / "~"
//! gen-delims  = ":" / "/" / "?" / "#" / "[" / "]" / "@"
//! sub-delims  = "!" / "$" / "&" / "'" / "(" / ")"
//!             / "*" / "+" / "," / ";" / "="
//! reserved    = gen-delims / sub-delims
//! pchar       = unreserved / pct-encoded / sub-delims / ":" / "@"
//! ```
//!
//! Every predicate here works on a single byte. `pct-encoded` is handled by
//! the scanners, which treat `%` specially before consulting a class.

/// `ALPHA / DIGIT / "-" / "." / "_" / "~"`
#[must_use]
pub const fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// `":" / "/" / "?" / "#" / "[" / "]" / "@"`
#[must_use]
pub const fn is_gen_delim(b: u8) -> bool {
    matches!(b, b':' | b'/' | b'?' | b'#' | b'[' | b']' | b'@')
}

/// `"!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`
#[must_use]
pub const fn is_sub_delim(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// `gen-delims / sub-delims`
#[must_use]
pub const fn is_reserved(b: u8) -> bool {
    is_gen_delim(b) || is_sub_delim(b)
}

/// `DIGIT / "A" - "F" / "a" - "f"`
#[must_use]
pub const fn is_hexdig(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Characters after the leading ALPHA of a scheme.
pub(crate) const fn is_scheme_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Literal characters of `userinfo` (pct-encoded handled separately).
pub(crate) const fn is_userinfo_char(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || b == b':'
}

/// Literal characters of `reg-name` (pct-encoded handled separately).
pub(crate) const fn is_reg_name_char(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b)
}

/// Literal characters of `pchar` (pct-encoded handled separately).
pub(crate) const fn is_pchar(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || matches!(b, b':' | b'@')
}

/// `pchar / "/"`
pub(crate) const fn is_path_char(b: u8) -> bool {
    is_pchar(b) || b == b'/'
}

/// `pchar` without `":"`, for the first segment of a relative path.
pub(crate) const fn is_segment_nz_nc_char(b: u8) -> bool {
    is_pchar(b) && b != b':'
}

/// `pchar / "/" / "?"`, shared by query and fragment.
pub(crate) const fn is_query_char(b: u8) -> bool {
    is_pchar(b) || matches!(b, b'/' | b'?')
}

/// Returns the value of a hexadecimal digit.
pub(crate) const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decodes the `HH` of a `%HH` triplet into one byte.
pub(crate) const fn decode_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    match (hex_value(hi), hex_value(lo)) {
        (Some(hi), Some(lo)) => Some((hi << 4) | lo),
        _ => None,
    }
}
