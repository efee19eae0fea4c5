use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No slug was supplied, or it was only whitespace.
    MissingSlug,
    /// The slug does not name a known package.
    UnknownSlug(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingSlug => write!(f, "no package slug provided"),
            Error::UnknownSlug(slug) => write!(f, "unknown package slug: {slug:?}"),
        }
    }
}

impl std::error::Error for Error {}
