//! DuckDuckGo search backend.
//!
//! Uses the HTML-only version at `https://html.duckduckgo.com/html/`
//! which requires no JavaScript and is tolerant of automated requests.

use scraper::{Html, Selector};
use url::Url;

use crate::engine::{SearchBackend, SearchRequest};
use crate::error::SearchError;
use crate::http;
use crate::types::{Backend, Hit, SafeSearch};

const DDG_BASE_URL: &str = "https://html.duckduckgo.com";

/// DuckDuckGo HTML search scraper.
#[derive(Debug, Clone)]
pub struct DuckDuckGoEngine {
    client: reqwest::Client,
    base_url: String,
    user_agent: Option<String>,
}

impl DuckDuckGoEngine {
    /// Create an engine that sends requests through `client`.
    pub fn new(client: reqwest::Client, user_agent: Option<String>) -> Self {
        Self {
            client,
            base_url: DDG_BASE_URL.to_owned(),
            user_agent,
        }
    }

    /// Point the engine at a different host (used by contract tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Target of a result link: the decoded `uddg` parameter for
    /// `//duckduckgo.com/l/?uddg=...` redirects, the link itself otherwise.
    /// Links that are not absolute URLs yield `None`.
    fn extract_url(href: &str) -> Option<String> {
        let full_href = if href.starts_with("//") {
            format!("https:{href}")
        } else {
            href.to_string()
        };

        let parsed = Url::parse(&full_href).ok()?;

        if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
        } else {
            Some(full_href)
        }
    }
}

impl SearchBackend for DuckDuckGoEngine {
    async fn search(&self, request: &SearchRequest<'_>) -> Result<Vec<Hit>, SearchError> {
        tracing::trace!(query = request.keyword, "DuckDuckGo search");

        let mut params = vec![
            ("q", request.keyword),
            ("kl", request.region),
            ("kp", safe_search_value(request.safe_search)),
        ];
        if let Some(window) = request.time_window {
            params.push(("df", window.code()));
        }

        let response = self
            .client
            .post(format!("{}/html/", self.base_url))
            .form(&params)
            .header("User-Agent", http::user_agent(self.user_agent.as_deref()))
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest("DuckDuckGo", "request failed", e))?
            .error_for_status()
            .map_err(|e| SearchError::from_reqwest("DuckDuckGo", "HTTP error", e))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::from_reqwest("DuckDuckGo", "response read failed", e))?;

        tracing::trace!(bytes = html.len(), "DuckDuckGo response received");

        parse_duckduckgo_html(&html, request.max_results)
    }

    fn backend_type(&self) -> Backend {
        Backend::DuckDuckGo
    }
}

fn safe_search_value(level: SafeSearch) -> &'static str {
    match level {
        SafeSearch::Strict => "1",
        SafeSearch::Moderate => "-1",
        SafeSearch::Off => "-2",
    }
}

/// Parse DuckDuckGo HTML response into hits.
pub(crate) fn parse_duckduckgo_html(
    html: &str,
    max_results: usize,
) -> Result<Vec<Hit>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse(
        ".result.results_links.results_links_deep:not(.result--ad), .web-result:not(.result--ad)",
    )
    .map_err(|e| SearchError::Parse(format!("invalid result selector: {e:?}")))?;
    let title_sel = Selector::parse(".result__a")
        .map_err(|e| SearchError::Parse(format!("invalid title selector: {e:?}")))?;
    let snippet_sel = Selector::parse(".result__snippet")
        .map_err(|e| SearchError::Parse(format!("invalid snippet selector: {e:?}")))?;

    let mut hits = Vec::new();

    for element in document.select(&result_sel) {
        if hits.len() >= max_results {
            break;
        }

        let Some(title_el) = element.select(&title_sel).next() else {
            continue;
        };

        let title = title_el.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }

        let Some(url) = title_el
            .value()
            .attr("href")
            .and_then(DuckDuckGoEngine::extract_url)
        else {
            continue;
        };

        let snippet = element
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty());

        hits.push(Hit {
            title: Some(title),
            body: snippet,
            href: Some(url),
            ..Default::default()
        });
    }

    tracing::debug!(count = hits.len(), "DuckDuckGo results parsed");
    Ok(hits)
}
