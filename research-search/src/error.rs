//! Error types for the research-search crate.
//!
//! Engine-level errors never escape a search run: the adapter turns them
//! into an empty hit list. Only configuration and client construction
//! errors reach the caller.

/// Errors that can occur while querying a search backend.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request to the search backend failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A request exceeded the configured per-request timeout.
    #[error("search timed out: {0}")]
    Timeout(String),

    /// Failed to parse the backend's response HTML.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Classify a [`reqwest::Error`] raised while talking to `backend`.
    pub(crate) fn from_reqwest(backend: &str, stage: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(format!("{backend} {stage}: {err}"))
        } else {
            Self::Http(format!("{backend} {stage}: {err}"))
        }
    }
}

/// Convenience type alias for research-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
