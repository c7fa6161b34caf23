//! Error handling
//!
//! Three kinds of failure, kept apart so callers can decide what to do:
//! a bad code/name ([`DogError::InvalidDog`]), a network problem
//! ([`TransportError`]) or a page that doesn't look like we expect
//! ([`ParseError`]).

/// Failure to fetch a page or image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransportError {
    /// The URL we were trying to fetch.
    pub url: String,
    /// What went wrong.
    pub reason: String,
}

impl TransportError {
    /// Builds a transport error for `url`.
    pub fn new(url: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to fetch {}: {}", self.url, self.reason)
    }
}

impl std::error::Error for TransportError {}

/// The fetched HTML is missing something we need.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// No `<p class="lead">` on the page.
    MissingDescription,
    /// No `<img class="thumbnail" itemprop="image">` on the page.
    MissingImage,
    /// The image element has no `src` attribute.
    MissingImageSource,
    /// A CSS selector failed to compile.
    InvalidSelector(&'static str),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDescription => write!(f, "Page has no lead paragraph"),
            Self::MissingImage => write!(f, "Page has no thumbnail image"),
            Self::MissingImageSource => write!(f, "Thumbnail image has no src attribute"),
            Self::InvalidSelector(css) => write!(f, "Invalid CSS selector: {css}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors returned by a dog lookup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DogError {
    /// The code or name isn't in the catalog, nothing was fetched.
    InvalidDog(String),
    /// Fetching the page or image failed.
    Transport(TransportError),
    /// The page didn't have the expected structure.
    Parse(ParseError),
}

impl DogError {
    /// `code` isn't in the catalog.
    pub fn invalid_code(code: impl std::fmt::Display) -> Self {
        DogError::InvalidDog(format!("{code} is not a valid status code"))
    }

    /// `name` isn't in the catalog.
    pub fn invalid_name(name: impl std::fmt::Display) -> Self {
        DogError::InvalidDog(format!("{name} is not a valid status code name"))
    }

    /// True when the caller asked for a dog that doesn't exist.
    pub fn is_invalid_dog(&self) -> bool {
        matches!(self, Self::InvalidDog(_))
    }
}

impl std::fmt::Display for DogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDog(message) => write!(f, "{message}"),
            Self::Transport(err) => err.fmt(f),
            Self::Parse(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for DogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDog(_) => None,
            Self::Transport(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<TransportError> for DogError {
    fn from(err: TransportError) -> Self {
        DogError::Transport(err)
    }
}

impl From<ParseError> for DogError {
    fn from(err: ParseError) -> Self {
        DogError::Parse(err)
    }
}
