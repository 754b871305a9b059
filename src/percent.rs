//! Percent-decoding of `%HH` triplets.

use std::borrow::Cow;

use crate::chars::decode_hex_pair;
use crate::cursor::Cursor;
use crate::error::ParseError;

/// Validates every `%HH` triplet in `input` and decodes it to bytes.
///
/// Characters other than `%` are copied through unchanged, so this also works
/// on text that was never part of a URI. Input without any `%` is borrowed.
///
/// # Errors
///
/// Returns `InvalidPercentEncoding` at the offset of the first `%` that is not
/// followed by two hexadecimal digits.
///
/// # Examples
///
/// ```
/// use rfc3986_uri::percent_decode;
///
/// assert_eq!(&*percent_decode("John%20Doe").unwrap(), b"John Doe");
/// assert!(percent_decode("100%").is_err());
/// ```
pub fn percent_decode(input: &str) -> Result<Cow<'_, [u8]>, ParseError> {
    let mut cursor = Cursor::new(input);
    cursor.scan_encoded(|b| b != b'%')?;
    Ok(decode_validated(input))
}

/// Decodes a component that already passed percent-encoding validation.
///
/// A malformed triplet is copied through literally.
pub(crate) fn decode_validated(input: &str) -> Cow<'_, [u8]> {
    let bytes = input.as_bytes();
    if !bytes.contains(&b'%') {
        return Cow::Borrowed(bytes);
    }

    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let (Some(&hi), Some(&lo)) = (bytes.get(i + 1), bytes.get(i + 2)) {
                if let Some(decoded) = decode_hex_pair(hi, lo) {
                    out.push(decoded);
                    i += 3;
                    continue;
                }
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn borrows_when_nothing_to_decode() {
        assert!(matches!(percent_decode("plain").unwrap(), Cow::Borrowed(b"plain")));
    }

    #[test]
    fn decodes_mixed_case_hex() {
        assert_eq!(&*percent_decode("%c3%A9t%C3%a9").unwrap(), "été".as_bytes());
    }

    #[test]
    fn decodes_reserved_octets() {
        assert_eq!(&*percent_decode("a%2Fb%3Fc").unwrap(), b"a/b?c");
    }

    #[test]
    fn rejects_short_triplet() {
        let err = percent_decode("abc%4").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidPercentEncoding);
        assert_eq!(err.offset, Some(3));
    }

    #[test]
    fn rejects_non_hex_triplet() {
        let err = percent_decode("%zz").unwrap_err();
        assert_eq!(err.offset, Some(0));
    }

    #[test]
    fn lenient_decoder_passes_bad_triplets_through() {
        assert_eq!(&*decode_validated("%41%zz"), b"A%zz");
    }
}
