use std::fmt;

/// Result type for logpane-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Unrecognized sort order name
    InvalidSortOrder(String),
    /// Unrecognized dedup strategy name
    InvalidDedupStrategy(String),
    /// Unrecognized similarity mode name
    InvalidSimilarityMode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSortOrder(s) => write!(f, "invalid sort order: {}", s),
            Error::InvalidDedupStrategy(s) => write!(f, "invalid dedup strategy: {}", s),
            Error::InvalidSimilarityMode(s) => write!(f, "invalid similarity mode: {}", s),
        }
    }
}

impl std::error::Error for Error {}
