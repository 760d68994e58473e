//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] pins the backend for a run and carries the per-keyword
//! request options. It deserializes from the `[search]` table of a TOML
//! config file; every field is optional there.

use serde::Deserialize;

use crate::error::SearchError;
use crate::types::{Backend, SafeSearch, TimeWindow};

/// Region code used when none is configured.
pub const DEFAULT_REGION: &str = "en-us";

/// Configuration for a search run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Backend queried for every keyword of the run.
    pub backend: Backend,
    /// Maximum hits kept per keyword. Zero skips the network entirely.
    pub max_results: usize,
    /// Locale code forwarded verbatim to the backend.
    ///
    /// Bing reads it as a market (`en-us`), DuckDuckGo as a `kl` code
    /// (`us-en`). The default suits Bing; set it explicitly when selecting
    /// [`Backend::DuckDuckGo`].
    pub region: String,
    /// Optional recency filter.
    pub time_window: Option<TimeWindow>,
    /// Safe-search level.
    pub safe_search: SafeSearch,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Bing,
            max_results: 10,
            region: DEFAULT_REGION.to_owned(),
            time_window: None,
            safe_search: SafeSearch::Moderate,
            timeout_seconds: 8,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `region` must not be blank
    /// - `user_agent`, when set, must not be blank
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.region.trim().is_empty() {
            return Err(SearchError::Config("region must not be empty".into()));
        }
        if matches!(self.user_agent.as_deref(), Some(ua) if ua.trim().is_empty()) {
            return Err(SearchError::Config(
                "user_agent must not be empty when set".into(),
            ));
        }
        Ok(())
    }
}
