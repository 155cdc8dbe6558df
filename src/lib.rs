//! Parser, validator and URI presentation for Digital Object Identifiers (DOIs).
//!
//! This crate parses DOIs from the forms they are commonly written in,
//! validates their shape, and renders them back as canonical, printable,
//! and correctly percent-encoded URI presentations.
//!
//! # Overview
//!
//! A DOI has the structure:
//!
//! ```text
//! 10.<registrant-code>/<suffix>
//! ```
//!
//! The suffix is chosen by the registrant and may contain characters that
//! are significant in URIs. Pasting a DOI such as `10.1000/456#789` behind
//! a resolver base URL turns `789` into a fragment; the DOI has to be
//! percent-encoded (`10.1000/456%23789`) to survive. [`Doi`] keeps the
//! unescaped value and encodes it only when building a URI, using a URI
//! builder that takes scheme, authority and path separately.
//!
//! # Quick Start
//!
//! ```rust
//! use doi_uri::Doi;
//!
//! // Pure, printable and resolver URL forms are all accepted
//! let doi = Doi::parse("10.1000/456#789").unwrap();
//! assert_eq!(doi, Doi::parse("doi:10.1000/456#789").unwrap());
//! assert_eq!(doi, Doi::parse("https://doi.org/10.1000/456%23789").unwrap());
//!
//! // Access components
//! assert_eq!(doi.directory_indicator(), "10");
//! assert_eq!(doi.registrant_code(), "1000");
//! assert_eq!(doi.prefix(), "10.1000");
//! assert_eq!(doi.suffix(), "456#789");
//!
//! // Render presentations
//! assert_eq!(doi.to_canonical_string(), "10.1000/456#789");
//! assert_eq!(doi.to_printable_string(), "doi:10.1000/456#789");
//! assert_eq!(doi.to_uri().as_str(), "https://doi.org/10.1000/456%23789");
//! ```
//!
//! # Recognized Presentations
//!
//! | Presentation | Example | Handling |
//! |--------------|---------|----------|
//! | Pure | `10.123/456` | parsed as-is |
//! | Printable | `doi:10.123/456` | `doi:` stripped, case ignored |
//! | Resolver URL | `https://doi.org/10.123/456` | base stripped, remainder percent-decoded |
//! | Legacy resolver URL | `http://dx.doi.org/10.123/456` | base stripped, remainder percent-decoded |
//!
//! Resolver URLs that carry unescaped `<`, `>`, `#`, spaces or broken
//! percent escapes are rejected instead of being silently truncated.
//!
//! # Comparison
//!
//! Equality, hashing and ordering ignore case across the whole DOI, so
//! `10.1/ABC` and `10.1/abc` are the same identifier. The original case is
//! preserved for display.
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize` as the canonical string, `Deserialize` from any
//!   recognized presentation.
//! - `kani`: model-checking harnesses, run with `cargo kani --features kani`.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod doi;
mod error;
#[cfg(kani)]
mod kani_impls;
pub mod prelude;
mod presentation;

pub use constants::{
    COMMON_DOI_PREFIXES, DIRECTORY_INDICATOR, DIRECTORY_INDICATOR_PREFIX, LEGACY_RESOLVER,
    PRINTABLE_PREFIX, RESOLVER_PREFIXES, SECURE_RESOLVER,
};
pub use doi::Doi;
pub use error::{ComponentError, ParseError, ParseErrorKind};
pub use presentation::Presentation;
