//! Errors raised by the suggestion pipeline

/// Error returned by a candidate source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SourceError {
    /// Error message
    pub message: String,
}

impl SourceError {
    /// Create a new source error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for SourceError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for SourceError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// A failed suggestion fetch, keeping the query that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Fetching suggestions for '{query}' failed: {source}")]
pub struct FetchError {
    /// The query text the fetch was issued for.
    pub query: String,
    /// The underlying source failure.
    pub source: SourceError,
}

impl FetchError {
    /// Creates a new fetch error.
    pub fn new(query: impl Into<String>, source: SourceError) -> Self {
        Self {
            query: query.into(),
            source,
        }
    }
}
