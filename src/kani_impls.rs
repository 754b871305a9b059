//! Kani Arbitrary implementations and proof harnesses.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::host::{parse_ipv4, parse_ipv6};
use crate::{HostKind, Scheme, Uri};

/// Bytes the harnesses draw from: every delimiter plus a few ordinary chars.
const URI_BYTES: &[u8] = b"aZ09+-.:/?#[]@!$&'()*,;=%_~ f";

const SCHEME_CHARS: &[u8] = b"aAzZ09+-.";

fn arbitrary_from(alphabet: &[u8]) -> u8 {
    let idx: usize = kani::any();
    alphabet[idx % alphabet.len()]
}

fn arbitrary_input(max: usize) -> String {
    let len: usize = kani::any();
    let len = len % (max + 1);
    (0..len).map(|_| arbitrary_from(URI_BYTES) as char).collect()
}

impl kani::Arbitrary for Scheme {
    fn any() -> Self {
        let len: usize = kani::any();
        let len = len % 4;

        let mut s = String::with_capacity(len + 1);
        s.push(if kani::any() { 'h' } else { 'X' });
        for _ in 0..len {
            s.push(arbitrary_from(SCHEME_CHARS) as char);
        }

        Scheme::parse(&s).expect("valid scheme by construction")
    }
}

/// Proof: parsing never panics, and errors point inside the input.
#[kani::proof]
#[kani::unwind(8)]
fn proof_parse_total() {
    let input = arbitrary_input(6);
    if let Err(err) = Uri::parse(&input) {
        if let Some(offset) = err.offset {
            assert!(offset <= input.len());
        }
    }
}

/// Proof: an accepted scheme is lowercase.
#[kani::proof]
#[kani::unwind(6)]
fn proof_scheme_lowercase() {
    let scheme: Scheme = kani::any();
    assert!(!scheme.bytes().any(|b| b.is_ascii_uppercase()));
    assert!(scheme.as_bytes()[0].is_ascii_lowercase());
}

/// Proof: an authority exists only when `//` follows the scheme.
#[kani::proof]
#[kani::unwind(8)]
fn proof_authority_requires_slashes() {
    let input = arbitrary_input(6);
    if let Ok(uri) = Uri::parse(&input) {
        let rest = &input[uri.scheme().len() + 1..];
        assert_eq!(uri.authority().is_some(), rest.starts_with("//"));
    }
}

/// Proof: a parsed URI prints back to something that parses to itself.
#[kani::proof]
#[kani::unwind(8)]
fn proof_display_roundtrip() {
    let input = arbitrary_input(5);
    if let Ok(uri) = Uri::parse(&input) {
        let printed = uri.to_string();
        assert_eq!(Uri::parse(&printed).ok(), Some(uri));
    }
}

/// Proof: a dotted quad is classified as IPv4 exactly when each octet fits.
///
/// The longest quad is 15 bytes, so string loops need 16 iterations.
#[kani::proof]
#[kani::unwind(17)]
fn proof_ipv4_octets() {
    let octets: [u8; 4] = kani::any();
    let text = format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);
    assert_eq!(parse_ipv4(text.as_bytes()).map(|ip| ip.octets()), Some(octets));
}

/// Proof: an IPv6 literal with `::` expands to the right groups.
#[kani::proof]
#[kani::unwind(10)]
fn proof_ipv6_ellipsis() {
    let head: u16 = kani::any();
    let tail: u16 = kani::any();
    let text = format!("{head:x}::{tail:x}");
    let ip = parse_ipv6(text.as_bytes()).expect("valid literal by construction");
    assert_eq!(ip.segments(), [head, 0, 0, 0, 0, 0, 0, tail]);
    assert!(HostKind::Ipv6(ip).is_ip());
}
