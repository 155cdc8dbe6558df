//! Main DOI value type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::str::FromStr;

use fluent_uri::Uri;
use fluent_uri::build::Builder;
use fluent_uri::component::Scheme;
use fluent_uri::pct_enc::encoder::{Path, RegName};
use fluent_uri::pct_enc::{EStr, EString};
use tracing::{debug, trace};

use crate::constants::{
    DIRECTORY_INDICATOR, DIRECTORY_INDICATOR_PREFIX, PRINTABLE_PREFIX, RESOLVER_HOST,
    RESOLVER_SCHEME,
};
use crate::error::{ComponentError, ParseError, ParseErrorKind};
use crate::presentation::{self, Presentation};

const REGISTRANT_CODE: &str = "registrant code";
const SUFFIX: &str = "suffix";

const DEFAULT_SCHEME: &Scheme = Scheme::new_or_panic(RESOLVER_SCHEME);
const DEFAULT_HOST: &EStr<RegName> = EStr::new_or_panic(RESOLVER_HOST);

/// A parsed and validated Digital Object Identifier.
///
/// A DOI is the directory indicator `10`, a registrant code and a
/// registrant-chosen suffix:
///
/// ```text
/// 10.<registrant-code>/<suffix>
/// ```
///
/// The suffix may contain nearly any character, including ones that are
/// significant in URIs (`#`, `<`, `>`, `?`, `%`, space). `Doi` keeps the
/// unescaped value and only percent-encodes when rendering a URI.
///
/// Equality, hashing and ordering ignore case, as DOIs are matched
/// case-insensitively by resolvers.
///
/// # Examples
///
/// ```
/// use doi_uri::Doi;
///
/// let doi = Doi::parse("https://doi.org/10.1000/456%23789").unwrap();
/// assert_eq!(doi.prefix(), "10.1000");
/// assert_eq!(doi.suffix(), "456#789");
/// assert_eq!(doi.to_printable_string(), "doi:10.1000/456#789");
/// assert_eq!(doi.to_uri().as_str(), "https://doi.org/10.1000/456%23789");
///
/// assert_eq!(doi, Doi::parse("DOI:10.1000/456#789").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Doi {
    registrant_code: String,
    suffix: String,
}

impl Doi {
    /// Creates a DOI from its registrant code and suffix.
    ///
    /// Both values are stored as given; they only need to contain at least
    /// one non-whitespace character.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Blank`] if either component is empty or only
    /// whitespace. The registrant code is checked first.
    ///
    /// # Examples
    ///
    /// ```
    /// use doi_uri::Doi;
    ///
    /// let doi = Doi::new("1038", "issn.1476-4687").unwrap();
    /// assert_eq!(doi.to_string(), "10.1038/issn.1476-4687");
    ///
    /// assert!(Doi::new("1038", "  ").is_err());
    /// ```
    pub fn new(
        registrant_code: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Result<Self, ComponentError> {
        Self::from_parts(Some(registrant_code.into()), Some(suffix.into()))
    }

    /// Creates a DOI from components that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::Missing`] if either component is `None` and
    /// [`ComponentError::Blank`] if either is empty or only whitespace.
    pub fn from_parts(
        registrant_code: Option<String>,
        suffix: Option<String>,
    ) -> Result<Self, ComponentError> {
        let registrant_code = Self::validate_component(registrant_code, REGISTRANT_CODE)?;
        let suffix = Self::validate_component(suffix, SUFFIX)?;
        Ok(Self {
            registrant_code,
            suffix,
        })
    }

    /// Parses a DOI from any of its common presentations.
    ///
    /// Accepted forms:
    /// - pure DOIs, e.g. `10.123/456`
    /// - printable DOIs, e.g. `doi:10.123/456` (prefix case is ignored)
    /// - resolver URLs with a percent-encoded DOI, e.g.
    ///   `https://doi.org/10.123/456%23789` or `http://dx.doi.org/10.123/456`
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The DOI does not start with the `10.` directory indicator
    /// - The registrant code or suffix is missing or blank
    /// - A resolver URL carries unescaped characters or broken percent escapes
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with_presentation(input).map(|(doi, _)| doi)
    }

    /// Parses a DOI like [`Doi::parse`] and also reports which presentation
    /// it was written in.
    ///
    /// # Errors
    ///
    /// Same as [`Doi::parse`].
    pub fn parse_with_presentation(input: &str) -> Result<(Self, Presentation), ParseError> {
        presentation::strip_prefix(input)
            .and_then(|(body, presentation)| {
                trace!(input, ?presentation, "recognized DOI presentation");
                Self::parse_body(&body).map(|doi| (doi, presentation))
            })
            .map_err(|kind| Self::rejected(input, kind))
    }

    /// Parses a DOI from the path of a URI, e.g. `https://doi.org/10.1000/456%23789`.
    ///
    /// The path is percent-decoded and must start with `/`. Scheme and
    /// authority are ignored, so any resolver is accepted.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the path does not start with `/`, does not
    /// decode to UTF-8, or does not hold a well-formed DOI.
    ///
    /// # Examples
    ///
    /// ```
    /// use doi_uri::Doi;
    /// use fluent_uri::Uri;
    ///
    /// let uri = Uri::parse("https://example.org/10.1000/456%23789").unwrap();
    /// let doi = Doi::from_uri(&uri).unwrap();
    /// assert_eq!(doi.to_string(), "10.1000/456#789");
    /// ```
    pub fn from_uri(uri: &Uri<&str>) -> Result<Self, ParseError> {
        Self::parse_uri_path(uri).map_err(|kind| Self::rejected(uri.as_str(), kind))
    }

    /// Returns the directory indicator, always `"10"`.
    #[must_use]
    pub const fn directory_indicator(&self) -> &'static str {
        DIRECTORY_INDICATOR
    }

    /// Returns the registrant code.
    #[must_use]
    pub fn registrant_code(&self) -> &str {
        &self.registrant_code
    }

    /// Returns the suffix, unescaped.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns the DOI prefix: directory indicator and registrant code,
    /// e.g. `10.1000`.
    #[must_use]
    pub fn prefix(&self) -> String {
        format!("{DIRECTORY_INDICATOR_PREFIX}{}", self.registrant_code)
    }

    /// Returns the canonical, unescaped DOI string, e.g. `10.1000/456#789`.
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Returns the DOI as displayed on screen or in print, e.g. `doi:10.1000/456#789`.
    #[must_use]
    pub fn to_printable_string(&self) -> String {
        format!("{PRINTABLE_PREFIX}{self}")
    }

    /// Returns the DOI as a URI on the default resolver `https://doi.org/`.
    ///
    /// Characters not allowed in a URI path are percent-encoded, so `#`
    /// becomes `%23` instead of starting a fragment.
    #[must_use]
    pub fn to_uri(&self) -> Uri<String> {
        self.to_uri_with(None)
    }

    /// Returns the DOI as a URI on the given resolver.
    ///
    /// The resolver's scheme, host and port are kept. Its userinfo, path,
    /// query and fragment are dropped. `None` selects `https://doi.org/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use doi_uri::Doi;
    /// use fluent_uri::Uri;
    ///
    /// let doi = Doi::parse("10.1000/123 456").unwrap();
    /// let resolver = Uri::parse("http://dx.doi.org/").unwrap();
    /// assert_eq!(
    ///     doi.to_uri_with(Some(&resolver)).as_str(),
    ///     "http://dx.doi.org/10.1000/123%20456"
    /// );
    /// ```
    #[must_use]
    pub fn to_uri_with(&self, resolver: Option<&Uri<&str>>) -> Uri<String> {
        let path = self.encoded_path();
        let built = match resolver {
            Some(resolver) => {
                let rebased = without_userinfo(resolver);
                let resolver = match &rebased {
                    Some(uri) => uri.borrow(),
                    None => *resolver,
                };
                Uri::builder()
                    .scheme(resolver.scheme())
                    .optional(Builder::authority, resolver.authority())
                    .path(&path)
                    .build()
            }
            None => Uri::builder()
                .scheme(DEFAULT_SCHEME)
                .authority_with(|b| b.host(DEFAULT_HOST))
                .path(&path)
                .build(),
        };
        // A path of "/10." followed by encoded text is valid with or without authority.
        built.expect("encoded DOI path is absolute and never starts with \"//\"")
    }

    /// Returns true if `candidate` is a prefix commonly written in front of
    /// a DOI: `doi:`, `https://doi.org/` or `http://dx.doi.org/`, ignoring
    /// case. `None` never matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use doi_uri::Doi;
    ///
    /// assert!(Doi::is_commonly_used_prefix("DOI:"));
    /// assert!(!Doi::is_commonly_used_prefix("http://example.org"));
    /// assert!(!Doi::is_commonly_used_prefix(None));
    /// ```
    pub fn is_commonly_used_prefix<'a>(candidate: impl Into<Option<&'a str>>) -> bool {
        presentation::is_common_prefix(candidate.into().unwrap_or_default())
    }

    fn validate_component(
        value: Option<String>,
        component: &'static str,
    ) -> Result<String, ComponentError> {
        let value = value.ok_or(ComponentError::Missing { component })?;
        if value.trim().is_empty() {
            return Err(ComponentError::Blank { component });
        }
        Ok(value)
    }

    fn parse_body(candidate: &str) -> Result<Self, ParseErrorKind> {
        let rest = candidate
            .strip_prefix(DIRECTORY_INDICATOR_PREFIX)
            .ok_or(ParseErrorKind::MissingDirectoryIndicator)?;

        // Only the first slash delimits; the suffix may contain more.
        let (registrant_code, suffix) = rest
            .split_once('/')
            .ok_or(ParseErrorKind::MissingRegistrantCode)?;

        if registrant_code.is_empty() {
            return Err(ParseErrorKind::MissingRegistrantCode);
        }

        if suffix.is_empty() {
            return Err(ParseErrorKind::MissingSuffix);
        }

        Self::new(registrant_code, suffix).map_err(ParseErrorKind::InvalidComponent)
    }

    fn parse_uri_path(uri: &Uri<&str>) -> Result<Self, ParseErrorKind> {
        let path = uri
            .path()
            .decode()
            .to_string()
            .map_err(|_| ParseErrorKind::InvalidUtf8)?;
        let body = path.strip_prefix('/').ok_or(ParseErrorKind::InvalidPath)?;
        Self::parse_body(body)
    }

    fn rejected(input: &str, kind: ParseErrorKind) -> ParseError {
        debug!(input, reason = %kind, "rejected DOI");
        ParseError {
            input: input.to_string(),
            kind,
        }
    }

    /// Percent-encodes `/` and the canonical DOI as an absolute URI path.
    fn encoded_path(&self) -> EString<Path> {
        let mut path = EString::<Path>::new();
        path.push('/');
        path.encode_str::<Path>(&self.to_canonical_string());
        path
    }

    /// Canonical form, lowercased char by char.
    fn folded_chars(&self) -> impl Iterator<Item = char> + '_ {
        DIRECTORY_INDICATOR_PREFIX
            .chars()
            .chain(self.registrant_code.chars())
            .chain(iter::once('/'))
            .chain(self.suffix.chars())
            .flat_map(char::to_lowercase)
    }
}

/// Returns `scheme://host[:port]` of a resolver that carries userinfo, or
/// `None` when there is nothing to leave out.
fn without_userinfo(resolver: &Uri<&str>) -> Option<Uri<String>> {
    let authority = resolver.authority()?;
    let userinfo = authority.userinfo()?;
    let host_and_port = &authority.as_str()[userinfo.as_str().len() + 1..];
    Uri::parse(format!("{}://{host_and_port}", resolver.scheme().as_str())).ok()
}

impl fmt::Display for Doi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{DIRECTORY_INDICATOR_PREFIX}{}/{}",
            self.registrant_code, self.suffix
        )
    }
}

impl FromStr for Doi {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Doi {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<&Uri<&str>> for Doi {
    type Error = ParseError;

    fn try_from(uri: &Uri<&str>) -> Result<Self, Self::Error> {
        Self::from_uri(uri)
    }
}

impl PartialEq for Doi {
    fn eq(&self, other: &Self) -> bool {
        self.folded_chars().eq(other.folded_chars())
    }
}

impl Eq for Doi {}

impl Hash for Doi {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.folded_chars() {
            c.hash(state);
        }
    }
}

impl PartialOrd for Doi {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Doi {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded_chars().cmp(other.folded_chars())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Doi {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Doi {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
