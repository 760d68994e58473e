//! Trait definition for pluggable search backends.
//!
//! Each backend (Bing, DuckDuckGo) implements [`SearchBackend`] so the
//! adapter can drive any of them through one call contract. Tests plug in
//! stub backends through the same trait.

use crate::error::SearchError;
use crate::types::{Backend, Hit, SafeSearch, TimeWindow};

/// Options for a single backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest<'a> {
    /// The keyword variant being searched.
    pub keyword: &'a str,
    /// Upper bound on returned hits.
    pub max_results: usize,
    /// Optional recency filter.
    pub time_window: Option<TimeWindow>,
    /// Locale code, forwarded verbatim.
    pub region: &'a str,
    /// Safe-search level.
    pub safe_search: SafeSearch,
}

/// A pluggable search backend.
///
/// Implementors fetch one page of results for a keyword and return hits in
/// provider rank order. Each backend handles its own:
///
/// - URL and parameter construction
/// - HTTP request with appropriate headers
/// - HTML parsing via CSS selectors
///
/// All implementations must be `Send + Sync`.
pub trait SearchBackend: Send + Sync {
    /// Run one query and return parsed hits.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the HTTP request fails, the response cannot
    /// be parsed, or the backend is blocking requests.
    fn search(
        &self,
        request: &SearchRequest<'_>,
    ) -> impl std::future::Future<Output = Result<Vec<Hit>, SearchError>> + Send;

    /// Returns which [`Backend`] variant this implementation represents.
    fn backend_type(&self) -> Backend;
}
