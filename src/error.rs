//! Error types for deep-research runs.

use std::path::PathBuf;

use research_search::SearchError;

/// Fatal errors for a research run.
///
/// Per-keyword search failures are not represented here; they are absorbed
/// by the search adapter and only show up as warnings.
#[derive(Debug, thiserror::Error)]
pub enum ResearchError {
    /// The search client could not be constructed at startup.
    #[error("search capability unavailable: {0} (check TLS/network support)")]
    Capability(String),

    /// Configuration file or settings are invalid.
    #[error("config error: {0}")]
    Config(String),

    /// The report could not be rendered.
    #[error("render error: {0}")]
    Render(String),

    /// The report could not be written to the requested file.
    #[error("failed to write report to {}: {source}", .path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error on the primary output stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SearchError> for ResearchError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Config(msg) => Self::Config(msg),
            other => Self::Capability(other.to_string()),
        }
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ResearchError>;
