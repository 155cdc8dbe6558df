//! Constants for DOI parsing and presentation.

/// The DOI directory indicator.
pub const DIRECTORY_INDICATOR: &str = "10";

/// Directory indicator followed by the separating full stop.
pub const DIRECTORY_INDICATOR_PREFIX: &str = "10.";

/// Label preceding a DOI in screen and print presentation.
pub const PRINTABLE_PREFIX: &str = "doi:";

/// Default resolver base URL.
pub const SECURE_RESOLVER: &str = "https://doi.org/";

/// Legacy resolver base URL, still common in older citations.
pub const LEGACY_RESOLVER: &str = "http://dx.doi.org/";

/// Resolver base URLs recognized when parsing, in match order.
pub const RESOLVER_PREFIXES: [&str; 2] = [SECURE_RESOLVER, LEGACY_RESOLVER];

/// Every prefix commonly seen in front of a DOI.
pub const COMMON_DOI_PREFIXES: [&str; 3] = [PRINTABLE_PREFIX, SECURE_RESOLVER, LEGACY_RESOLVER];

/// Scheme of the default resolver.
pub(crate) const RESOLVER_SCHEME: &str = "https";

/// Host of the default resolver.
pub(crate) const RESOLVER_HOST: &str = "doi.org";
