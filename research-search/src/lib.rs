//! # research-search
//!
//! Keyword-expanded web search for a single topic.
//!
//! A topic is fanned out into a handful of query variants, each variant is
//! searched on one backend (Bing by default, DuckDuckGo optionally), and the
//! concatenated hits are deduplicated by URL.
//!
//! ## Design
//!
//! - Scrapes the backend's HTML results page with CSS selectors
//! - Queries keywords strictly one after another, in expansion order
//! - Isolates per-keyword failures: a failing keyword contributes no hits
//! - Deduplicates by host + path, keeping the first occurrence
//! - No caching, ranking, or pagination
//!
//! ## Security
//!
//! - No API keys or secrets
//! - Search queries are logged only at trace level

pub mod adapter;
pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod types;

pub use adapter::SearchAdapter;
pub use config::SearchConfig;
pub use engine::{SearchBackend, SearchRequest};
pub use error::{Result, SearchError};
pub use orchestrator::search::{Expansion, SearchOutcome};
pub use types::{Backend, Hit, SafeSearch, TimeWindow};

/// Search `topic` with the backend configured in `config`.
///
/// Builds a [`SearchAdapter`] for this call and runs the full pipeline.
/// Callers issuing several searches should build the adapter once and use
/// [`orchestrator::search::orchestrate_search`] directly.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid or
/// [`SearchError::Http`] if the HTTP client cannot be built. Failures of
/// individual keyword queries are logged and never returned.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> research_search::Result<()> {
/// use research_search::{Expansion, SearchConfig};
///
/// let config = SearchConfig::default();
/// let outcome = research_search::search("rust async", Expansion::Expand, &config).await?;
/// for hit in &outcome.hits {
///     println!("{}: {}", hit.title(), hit.href());
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(
    topic: &str,
    expansion: Expansion,
    config: &SearchConfig,
) -> Result<SearchOutcome> {
    let adapter = SearchAdapter::from_config(config)?;
    let outcome =
        orchestrator::search::orchestrate_search(topic, expansion, &adapter, config).await;
    Ok(outcome)
}
