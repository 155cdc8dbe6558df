//! Error types for DOI construction and parsing.

use std::fmt;

/// Errors for a single DOI component passed to [`Doi::new`](crate::Doi::new)
/// or [`Doi::from_parts`](crate::Doi::from_parts).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// Component was not supplied at all
    Missing {
        /// Name of the missing component
        component: &'static str,
    },
    /// Component is empty or only whitespace
    Blank {
        /// Name of the blank component
        component: &'static str,
    },
}

impl ComponentError {
    /// Returns the name of the component that failed validation.
    #[must_use]
    pub const fn component(&self) -> &'static str {
        match self {
            Self::Missing { component } | Self::Blank { component } => component,
        }
    }
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { component } => write!(f, "DOI {component} may not be absent"),
            Self::Blank { component } => {
                write!(f, "DOI {component} must contain at least one non-whitespace character")
            }
        }
    }
}

impl std::error::Error for ComponentError {}

/// Errors that can occur when parsing a DOI from a string or URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input does not start with the `10.` directory indicator
    MissingDirectoryIndicator,
    /// No `/` follows the directory indicator, or nothing sits between them
    MissingRegistrantCode,
    /// Nothing follows the `/` separating prefix and suffix
    MissingSuffix,
    /// URI path does not start with `/`
    InvalidPath,
    /// Resolver URL carries characters that should have been percent-encoded,
    /// or a broken percent escape
    UnescapedDoiInUri,
    /// Percent-decoded octets are not valid UTF-8
    InvalidUtf8,
    /// A component is present but blank
    InvalidComponent(ComponentError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse DOI '{}': ", self.input)?;
        fmt::Display::fmt(&self.kind, f)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDirectoryIndicator => write!(f, "expected directory indicator '10.'"),
            Self::MissingRegistrantCode => write!(f, "missing registrant code"),
            Self::MissingSuffix => write!(f, "missing suffix"),
            Self::InvalidPath => write!(f, "URI path does not start with '/'"),
            Self::UnescapedDoiInUri => {
                write!(f, "found unescaped DOI in URI; characters such as '<', '>', '#' and space must be percent-encoded")
            }
            Self::InvalidUtf8 => write!(f, "percent-decoded DOI is not valid UTF-8"),
            Self::InvalidComponent(e) => write!(f, "invalid component: {e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::InvalidComponent(e) => Some(e),
            _ => None,
        }
    }
}
