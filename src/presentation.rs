//! Recognition of the common ways a DOI is written down.
//!
//! A DOI reaches us either pure (`10.1000/123`), in printable form
//! (`doi:10.1000/123`), or embedded in a resolver URL
//! (`https://doi.org/10.1000/123`). Resolver URLs carry the DOI
//! percent-encoded and are decoded here before the DOI body is parsed.

use fluent_uri::Iri;

use crate::constants::{
    COMMON_DOI_PREFIXES, LEGACY_RESOLVER, PRINTABLE_PREFIX, RESOLVER_PREFIXES, SECURE_RESOLVER,
};
use crate::error::ParseErrorKind;

/// The presentation a DOI was written in.
///
/// # Examples
///
/// ```
/// use doi_uri::{Doi, Presentation};
///
/// let (_, presentation) = Doi::parse_with_presentation("doi:10.1000/123").unwrap();
/// assert_eq!(presentation, Presentation::Printable);
/// assert_eq!(presentation.prefix(), Some("doi:"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presentation {
    /// Bare DOI, e.g. `10.1000/123`
    Pure,
    /// Screen and print form, e.g. `doi:10.1000/123`
    Printable,
    /// URL on the default resolver, e.g. `https://doi.org/10.1000/123`
    SecureResolver,
    /// URL on the legacy resolver, e.g. `http://dx.doi.org/10.1000/123`
    LegacyResolver,
}

impl Presentation {
    /// Returns the lowercase prefix that identifies this presentation, if any.
    #[must_use]
    pub const fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Pure => None,
            Self::Printable => Some(PRINTABLE_PREFIX),
            Self::SecureResolver => Some(SECURE_RESOLVER),
            Self::LegacyResolver => Some(LEGACY_RESOLVER),
        }
    }

    /// Returns true if the DOI was embedded in a resolver URL.
    #[must_use]
    pub const fn is_resolver_url(self) -> bool {
        matches!(self, Self::SecureResolver | Self::LegacyResolver)
    }
}

/// Resolver presentations, in the order of [`RESOLVER_PREFIXES`].
const RESOLVER_PRESENTATIONS: [Presentation; RESOLVER_PREFIXES.len()] =
    [Presentation::SecureResolver, Presentation::LegacyResolver];

/// Returns true if `candidate` is, ignoring ASCII case, one of the prefixes
/// commonly written in front of a DOI.
pub(crate) fn is_common_prefix(candidate: &str) -> bool {
    COMMON_DOI_PREFIXES
        .iter()
        .any(|prefix| prefix.eq_ignore_ascii_case(candidate))
}

/// Strips a recognized prefix and returns the DOI body candidate.
///
/// Resolver URL remainders are percent-decoded; printable remainders are
/// returned verbatim. Anything without a recognized prefix is returned
/// unchanged as [`Presentation::Pure`].
pub(crate) fn strip_prefix(input: &str) -> Result<(String, Presentation), ParseErrorKind> {
    if let Some(rest) = strip_ignore_ascii_case(input, PRINTABLE_PREFIX) {
        return Ok((rest.to_string(), Presentation::Printable));
    }

    for (prefix, presentation) in RESOLVER_PREFIXES.into_iter().zip(RESOLVER_PRESENTATIONS) {
        if let Some(rest) = strip_ignore_ascii_case(input, prefix) {
            return decode_escaped(rest).map(|body| (body, presentation));
        }
    }

    Ok((input.to_string(), Presentation::Pure))
}

/// Strips `prefix` ignoring ASCII case, but only if something follows it.
fn strip_ignore_ascii_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    let rest = &input[prefix.len()..];
    (head.eq_ignore_ascii_case(prefix) && !rest.is_empty()).then_some(rest)
}

/// Decodes the part of a resolver URL following the resolver base.
///
/// The remainder is validated and decoded as an IRI query component, which
/// admits `/`, `?`, `:`, `@` and non-ASCII text unescaped. `[` and `]` are
/// let through as well. An unescaped `#` would start a fragment and silently
/// truncate the DOI, so it is rejected along with every other character a
/// query may not carry.
fn decode_escaped(escaped: &str) -> Result<String, ParseErrorKind> {
    let escaped = escaped.replace('[', "%5B").replace(']', "%5D");
    let carrier = format!("doi://resolver/?{escaped}");
    let iri = Iri::parse(carrier.as_str()).map_err(|_| ParseErrorKind::UnescapedDoiInUri)?;

    if iri.has_fragment() {
        return Err(ParseErrorKind::UnescapedDoiInUri);
    }

    let query = iri.query().ok_or(ParseErrorKind::UnescapedDoiInUri)?;
    query
        .decode()
        .to_string()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| ParseErrorKind::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_input_is_untouched() {
        let (body, presentation) = strip_prefix("10.1000/123").unwrap();
        assert_eq!(body, "10.1000/123");
        assert_eq!(presentation, Presentation::Pure);
    }

    #[test]
    fn printable_prefix_is_stripped_verbatim() {
        let (body, presentation) = strip_prefix("DoI:10.1000/123%23").unwrap();
        assert_eq!(body, "10.1000/123%23");
        assert_eq!(presentation, Presentation::Printable);
    }

    #[test]
    fn bare_prefix_is_not_stripped() {
        let (body, presentation) = strip_prefix("doi:").unwrap();
        assert_eq!(body, "doi:");
        assert_eq!(presentation, Presentation::Pure);

        let (body, presentation) = strip_prefix("https://doi.org/").unwrap();
        assert_eq!(body, "https://doi.org/");
        assert_eq!(presentation, Presentation::Pure);
    }

    #[test]
    fn resolver_remainder_is_decoded() {
        let (body, presentation) = strip_prefix("https://doi.org/10.1000/123%23456").unwrap();
        assert_eq!(body, "10.1000/123#456");
        assert_eq!(presentation, Presentation::SecureResolver);

        let (body, presentation) = strip_prefix("HTTP://DX.DOI.ORG/10.1/a%20b").unwrap();
        assert_eq!(body, "10.1/a b");
        assert_eq!(presentation, Presentation::LegacyResolver);
    }

    #[test]
    fn resolver_remainder_keeps_query_delimiters() {
        let (body, _) = strip_prefix("https://doi.org/10.1/a?b=c:d@e;f").unwrap();
        assert_eq!(body, "10.1/a?b=c:d@e;f");
    }

    #[test]
    fn resolver_remainder_may_carry_unescaped_non_ascii() {
        let (body, presentation) = strip_prefix("https://doi.org/10.1000/café").unwrap();
        assert_eq!(body, "10.1000/café");
        assert_eq!(presentation, Presentation::SecureResolver);

        let (body, _) = strip_prefix("http://dx.doi.org/10.1000/漢字%20x").unwrap();
        assert_eq!(body, "10.1000/漢字 x");
    }

    #[test]
    fn resolver_remainder_may_carry_square_brackets() {
        let (body, _) = strip_prefix("https://doi.org/10.1016/0040-4039[1]").unwrap();
        assert_eq!(body, "10.1016/0040-4039[1]");

        let (body, _) = strip_prefix("https://doi.org/10.1016/0040-4039%5B1%5D").unwrap();
        assert_eq!(body, "10.1016/0040-4039[1]");
    }

    #[test]
    fn unescaped_space_is_rejected() {
        let result = strip_prefix("https://doi.org/10.1000/a b");
        assert_eq!(result, Err(ParseErrorKind::UnescapedDoiInUri));
    }

    #[test]
    fn unescaped_angle_brackets_are_rejected() {
        let result = strip_prefix("http://dx.doi.org/10.1577/1548-8659(1993)122<0378:fotgsi>2.3.co;2");
        assert_eq!(result, Err(ParseErrorKind::UnescapedDoiInUri));
    }

    #[test]
    fn unescaped_hash_is_rejected() {
        let result = strip_prefix("https://doi.org/10.1000/123#456");
        assert_eq!(result, Err(ParseErrorKind::UnescapedDoiInUri));
    }

    #[test]
    fn broken_escape_is_rejected() {
        let result = strip_prefix("https://doi.org/10.1000/12%3");
        assert_eq!(result, Err(ParseErrorKind::UnescapedDoiInUri));

        let result = strip_prefix("https://doi.org/10.1000/%zz");
        assert_eq!(result, Err(ParseErrorKind::UnescapedDoiInUri));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let result = strip_prefix("https://doi.org/10.1000/%FF");
        assert_eq!(result, Err(ParseErrorKind::InvalidUtf8));
    }

    #[test]
    fn common_prefixes() {
        assert!(is_common_prefix("doi:"));
        assert!(is_common_prefix("DOI:"));
        assert!(is_common_prefix("https://doi.org/"));
        assert!(is_common_prefix("http://dx.doi.org/"));
        assert!(!is_common_prefix("http://example.org"));
        assert!(!is_common_prefix("https://doi.org"));
        assert!(!is_common_prefix(""));
    }

    #[test]
    fn resolver_prefixes_pair_with_their_presentation() {
        for (prefix, presentation) in RESOLVER_PREFIXES.into_iter().zip(RESOLVER_PRESENTATIONS) {
            assert_eq!(presentation.prefix(), Some(prefix));
            assert!(presentation.is_resolver_url());

            let (body, stripped) = strip_prefix(&format!("{prefix}10.1/a")).unwrap();
            assert_eq!(body, "10.1/a");
            assert_eq!(stripped, presentation);
        }
    }

    #[test]
    fn presentation_prefixes() {
        assert_eq!(Presentation::Pure.prefix(), None);
        assert!(Presentation::LegacyResolver.is_resolver_url());
        assert!(!Presentation::Printable.is_resolver_url());
    }
}
