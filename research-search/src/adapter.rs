//! Failure-isolating wrapper around a single search backend.
//!
//! [`SearchAdapter`] is built once per run and shared by reference. Every
//! call either returns the backend's hits (capped at `max_results`) or,
//! if the backend fails for that keyword, logs one warning and returns an
//! empty list. Errors never cross this boundary.

use crate::config::SearchConfig;
use crate::engine::{SearchBackend, SearchRequest};
use crate::engines::WebBackend;
use crate::error::SearchError;
use crate::types::{Backend, Hit, SafeSearch, TimeWindow};

/// One backend, pinned for the lifetime of a run.
#[derive(Debug)]
pub struct SearchAdapter<B = WebBackend> {
    backend: B,
    safe_search: SafeSearch,
}

impl SearchAdapter<WebBackend> {
    /// Validate `config` and build the configured web backend.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for an invalid configuration and
    /// [`SearchError::Http`] if the HTTP client cannot be constructed.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let backend = WebBackend::from_config(config)?;
        tracing::debug!(backend = %backend.backend_type(), "search adapter ready");
        Ok(Self::new(backend, config.safe_search))
    }
}

impl<B: SearchBackend> SearchAdapter<B> {
    /// Wrap an already-constructed backend.
    pub fn new(backend: B, safe_search: SafeSearch) -> Self {
        Self {
            backend,
            safe_search,
        }
    }

    /// Which backend this adapter talks to.
    pub fn backend(&self) -> Backend {
        self.backend.backend_type()
    }

    /// Borrow the wrapped backend.
    pub fn get_ref(&self) -> &B {
        &self.backend
    }

    /// Query one keyword. Never fails: a backend error yields `vec![]`.
    pub async fn query(
        &self,
        keyword: &str,
        max_results: usize,
        time_window: Option<TimeWindow>,
        region: &str,
    ) -> Vec<Hit> {
        if max_results == 0 {
            tracing::debug!(keyword, "max_results is 0, skipping backend call");
            return Vec::new();
        }

        let request = SearchRequest {
            keyword,
            max_results,
            time_window,
            region,
            safe_search: self.safe_search,
        };

        match self.backend.search(&request).await {
            Ok(mut hits) => {
                hits.truncate(max_results);
                tracing::debug!(keyword, count = hits.len(), "backend returned hits");
                hits
            }
            Err(err) => {
                tracing::warn!(
                    keyword,
                    backend = %self.backend(),
                    error = %err,
                    "search failed, continuing without results for this keyword"
                );
                Vec::new()
            }
        }
    }
}
