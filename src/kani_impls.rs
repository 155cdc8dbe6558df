//! Kani Arbitrary implementations and proof harnesses for property verification.
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

use crate::{DIRECTORY_INDICATOR_PREFIX, Doi};

/// Characters for registrant codes: digits and the full stop used by sub-registrants
const REGISTRANT_CHARS: &[u8] = b"0123456789.";

/// Characters for suffixes, including ones significant in URIs
const SUFFIX_CHARS: &[u8] = b"aZ09-._;()/:<>#% ?";

fn arbitrary_char(chars: &[u8]) -> char {
    let idx: usize = kani::any();
    chars[idx % chars.len()] as char
}

fn arbitrary_string(chars: &[u8], max_len: usize) -> String {
    let len: usize = kani::any();
    let len = 1 + (len % max_len);
    (0..len).map(|_| arbitrary_char(chars)).collect()
}

impl kani::Arbitrary for Doi {
    fn any() -> Self {
        // Leading digit keeps the registrant code non-blank
        let mut registrant_code = String::from("1");
        registrant_code.push_str(&arbitrary_string(REGISTRANT_CHARS, 3));

        // Leading letter keeps the suffix non-blank
        let mut suffix = String::from("x");
        suffix.push_str(&arbitrary_string(SUFFIX_CHARS, 4));

        Doi::new(registrant_code, suffix).expect("valid DOI by construction")
    }
}

/// Proof: Parse of the canonical string yields an equal DOI with identical components
#[kani::proof]
#[kani::unwind(10)]
fn proof_canonical_roundtrip() {
    let doi: Doi = kani::any();
    let canonical = doi.to_canonical_string();
    let reparsed = Doi::parse(&canonical).expect("canonical should parse");
    assert_eq!(reparsed.registrant_code(), doi.registrant_code());
    assert_eq!(reparsed.suffix(), doi.suffix());
}

/// Proof: Printable form parses back to the same DOI
#[kani::proof]
#[kani::unwind(10)]
fn proof_printable_roundtrip() {
    let doi: Doi = kani::any();
    let reparsed = Doi::parse(&doi.to_printable_string()).expect("printable should parse");
    assert_eq!(reparsed.to_canonical_string(), doi.to_canonical_string());
}

/// Proof: Canonical form always starts with the directory indicator
#[kani::proof]
#[kani::unwind(10)]
fn proof_canonical_has_directory_indicator() {
    let doi: Doi = kani::any();
    assert!(doi.to_canonical_string().starts_with(DIRECTORY_INDICATOR_PREFIX));
    assert!(doi.prefix().starts_with(DIRECTORY_INDICATOR_PREFIX));
}

/// Proof: Equality is reflexive and ordering agrees with it
#[kani::proof]
#[kani::unwind(10)]
fn proof_eq_consistent_with_ord() {
    let a: Doi = kani::any();
    let b: Doi = kani::any();
    assert_eq!(a, a.clone());
    assert_eq!(a == b, a.cmp(&b) == std::cmp::Ordering::Equal);
}
