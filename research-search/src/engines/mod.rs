//! Search backend implementations.
//!
//! Each module provides a struct implementing [`SearchBackend`] that
//! scrapes one provider's HTML results page. [`WebBackend`] picks one of
//! them for the whole run.

pub mod bing;
pub mod duckduckgo;

pub use bing::BingEngine;
pub use duckduckgo::DuckDuckGoEngine;

use crate::config::SearchConfig;
use crate::engine::{SearchBackend, SearchRequest};
use crate::error::SearchError;
use crate::http;
use crate::types::{Backend, Hit};

/// The concrete backend selected by [`SearchConfig::backend`].
#[derive(Debug, Clone)]
pub enum WebBackend {
    Bing(BingEngine),
    DuckDuckGo(DuckDuckGoEngine),
}

impl WebBackend {
    /// Build the HTTP client and the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = http::build_client(config)?;
        let user_agent = config.user_agent.clone();
        Ok(match config.backend {
            Backend::Bing => Self::Bing(BingEngine::new(client, user_agent)),
            Backend::DuckDuckGo => Self::DuckDuckGo(DuckDuckGoEngine::new(client, user_agent)),
        })
    }
}

impl SearchBackend for WebBackend {
    async fn search(&self, request: &SearchRequest<'_>) -> Result<Vec<Hit>, SearchError> {
        match self {
            Self::Bing(engine) => engine.search(request).await,
            Self::DuckDuckGo(engine) => engine.search(request).await,
        }
    }

    fn backend_type(&self) -> Backend {
        match self {
            Self::Bing(engine) => engine.backend_type(),
            Self::DuckDuckGo(engine) => engine.backend_type(),
        }
    }
}
