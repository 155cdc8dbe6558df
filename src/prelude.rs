//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use doi_uri::prelude::*;
//!
//! let doi = Doi::parse("doi:10.1000/123456").unwrap();
//! assert_eq!(doi.to_uri().as_str(), "https://doi.org/10.1000/123456");
//! ```

pub use crate::{
    // Core types
    Doi, Presentation,
    // Errors
    ComponentError, ParseError, ParseErrorKind,
    // Constants
    COMMON_DOI_PREFIXES, DIRECTORY_INDICATOR, DIRECTORY_INDICATOR_PREFIX, LEGACY_RESOLVER,
    PRINTABLE_PREFIX, RESOLVER_PREFIXES, SECURE_RESOLVER,
};
