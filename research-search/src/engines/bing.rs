//! Bing search backend, the default for a run.
//!
//! Bing sometimes wraps result links in `bing.com/ck/a` click-tracking
//! redirects whose `u` parameter carries the target URL as `a1` followed by
//! URL-safe base64. Those are unwrapped during parsing.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use scraper::{Html, Selector};
use url::Url;

use crate::engine::{SearchBackend, SearchRequest};
use crate::error::SearchError;
use crate::http;
use crate::types::{Backend, Hit, SafeSearch, TimeWindow};

const BING_BASE_URL: &str = "https://www.bing.com";

/// Bing HTML search scraper.
#[derive(Debug, Clone)]
pub struct BingEngine {
    client: reqwest::Client,
    base_url: String,
    user_agent: Option<String>,
}

impl BingEngine {
    /// Create an engine that sends requests through `client`.
    pub fn new(client: reqwest::Client, user_agent: Option<String>) -> Self {
        Self {
            client,
            base_url: BING_BASE_URL.to_owned(),
            user_agent,
        }
    }

    /// Point the engine at a different host (used by contract tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl SearchBackend for BingEngine {
    async fn search(&self, request: &SearchRequest<'_>) -> Result<Vec<Hit>, SearchError> {
        tracing::trace!(query = request.keyword, "Bing search");

        let count = request.max_results.min(50).to_string();
        let mut params: Vec<(&str, String)> = vec![
            ("q", request.keyword.to_owned()),
            ("mkt", request.region.to_owned()),
            (
                "safeSearch",
                safe_search_value(request.safe_search).to_owned(),
            ),
            ("count", count),
        ];
        if let Some(window) = request.time_window {
            params.push(("filters", time_filter(window, days_since_epoch())));
        }

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&params)
            .header("User-Agent", http::user_agent(self.user_agent.as_deref()))
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest("Bing", "request failed", e))?
            .error_for_status()
            .map_err(|e| SearchError::from_reqwest("Bing", "HTTP error", e))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::from_reqwest("Bing", "response read failed", e))?;

        tracing::trace!(bytes = html.len(), "Bing response received");

        parse_bing_html(&html, request.max_results)
    }

    fn backend_type(&self) -> Backend {
        Backend::Bing
    }
}

fn safe_search_value(level: SafeSearch) -> &'static str {
    match level {
        SafeSearch::Strict => "Strict",
        SafeSearch::Moderate => "Moderate",
        SafeSearch::Off => "Off",
    }
}

/// Bing's `filters` value for a recency window. A year has no preset, so it
/// is sent as a custom range of day numbers ending `today`.
fn time_filter(window: TimeWindow, today: i64) -> String {
    let code = match window {
        TimeWindow::Day => "ez1".to_owned(),
        TimeWindow::Week => "ez2".to_owned(),
        TimeWindow::Month => "ez3".to_owned(),
        TimeWindow::Year => format!("ez5_{}_{}", today - 365, today),
    };
    format!("ex1:\"{code}\"")
}

fn days_since_epoch() -> i64 {
    chrono::Utc::now().timestamp().div_euclid(86_400)
}

/// Resolve a `bing.com/ck/a` redirect to its target; other links pass through.
fn unwrap_redirect(href: &str) -> String {
    let Ok(parsed) = Url::parse(href) else {
        return href.to_owned();
    };
    let is_click_tracker = parsed
        .host_str()
        .is_some_and(|host| host == "bing.com" || host.ends_with(".bing.com"))
        && parsed.path().starts_with("/ck/a");
    if !is_click_tracker {
        return href.to_owned();
    }

    parsed
        .query_pairs()
        .find(|(key, _)| key == "u")
        .and_then(|(_, value)| decode_target(&value))
        .unwrap_or_else(|| href.to_owned())
}

fn decode_target(encoded: &str) -> Option<String> {
    let payload = encoded.strip_prefix("a1").unwrap_or(encoded);
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let target = String::from_utf8(bytes).ok()?;
    target.starts_with("http").then_some(target)
}

/// Parse Bing HTML response into hits.
///
/// Extracted as a separate function for testability with mock HTML.
pub(crate) fn parse_bing_html(html: &str, max_results: usize) -> Result<Vec<Hit>, SearchError> {
    let document = Html::parse_document(html);

    // Bing uses li.b_algo containers for organic search results
    let result_sel = Selector::parse("li.b_algo")
        .map_err(|e| SearchError::Parse(format!("invalid result selector: {e:?}")))?;
    let title_sel = Selector::parse("h2")
        .map_err(|e| SearchError::Parse(format!("invalid title selector: {e:?}")))?;
    let link_sel = Selector::parse("a")
        .map_err(|e| SearchError::Parse(format!("invalid link selector: {e:?}")))?;
    let snippet_sel = Selector::parse(".b_caption p, .b_lineclamp2, .b_lineclamp3")
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

        let href = title_el
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .filter(|h| !h.is_empty());
        let Some(href) = href else {
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
            href: Some(unwrap_redirect(href)),
            ..Default::default()
        });
    }

    tracing::debug!(count = hits.len(), "Bing results parsed");
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_BING_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<ol id="b_results">
<li class="b_algo">
  <h2><a href="https://www.rust-lang.org/" h="ID=SERP">Rust Programming Language</a></h2>
  <div class="b_caption"><p>A language empowering everyone to build reliable and efficient software.</p></div>
</li>
<li class="b_algo">
  <h2><a href="https://www.bing.com/ck/a?!&amp;&amp;p=abc&amp;u=a1aHR0cHM6Ly9kb2MucnVzdC1sYW5nLm9yZy9ib29rLw&amp;ntb=1">The Rust Programming Language Book</a></h2>
  <div class="b_caption"><p>An introductory book about Rust.</p></div>
</li>
<li class="b_algo">
  <h2><a href="https://en.wikipedia.org/wiki/Rust_(programming_language)">Rust (programming language) - Wikipedia</a></h2>
</li>
<li class="b_algo">
  <h2></h2>
  <div class="b_caption"><p>Result without a title is skipped.</p></div>
</li>
</ol>
</body>
</html>"#;

    #[test]
    fn parse_mock_html_returns_hits() {
        let hits = parse_bing_html(MOCK_BING_HTML, 10).expect("should parse");
        assert_eq!(hits.len(), 3);

        assert_eq!(hits[0].title(), "Rust Programming Language");
        assert_eq!(hits[0].href(), "https://www.rust-lang.org/");
        assert!(hits[0].body().contains("reliable and efficient software"));
        assert!(hits[0].extra.is_empty());
    }

    #[test]
    fn parse_unwraps_click_tracking_redirect() {
        let hits = parse_bing_html(MOCK_BING_HTML, 10).expect("should parse");
        assert_eq!(hits[1].href(), "https://doc.rust-lang.org/book/");
    }

    #[test]
    fn missing_snippet_leaves_body_unset() {
        let hits = parse_bing_html(MOCK_BING_HTML, 10).expect("should parse");
        assert!(hits[2].body.is_none());
        assert_eq!(hits[2].body(), "no summary");
    }

    #[test]
    fn parse_respects_max_results() {
        let hits = parse_bing_html(MOCK_BING_HTML, 2).expect("should parse");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn parse_zero_max_results_returns_empty() {
        let hits = parse_bing_html(MOCK_BING_HTML, 0).expect("should parse");
        assert!(hits.is_empty());
    }

    #[test]
    fn parse_empty_html_returns_empty() {
        let hits = parse_bing_html("<html><body></body></html>", 10).expect("should parse");
        assert!(hits.is_empty());
    }

    #[test]
    fn undecodable_redirect_is_kept_verbatim() {
        let href = "https://www.bing.com/ck/a?u=a1%%%";
        assert_eq!(unwrap_redirect(href), href);
    }

    #[test]
    fn non_redirect_link_passes_through() {
        assert_eq!(
            unwrap_redirect("https://example.com/ck/a?u=a1aHR0cHM6Ly9ldmlsLmNvbQ"),
            "https://example.com/ck/a?u=a1aHR0cHM6Ly9ldmlsLmNvbQ"
        );
    }

    #[test]
    fn time_filter_presets() {
        assert_eq!(time_filter(TimeWindow::Day, 20_000), "ex1:\"ez1\"");
        assert_eq!(time_filter(TimeWindow::Week, 20_000), "ex1:\"ez2\"");
        assert_eq!(time_filter(TimeWindow::Month, 20_000), "ex1:\"ez3\"");
    }

    #[test]
    fn time_filter_year_is_custom_range() {
        assert_eq!(
            time_filter(TimeWindow::Year, 20_000),
            "ex1:\"ez5_19635_20000\""
        );
    }

    #[test]
    fn safe_search_values() {
        assert_eq!(safe_search_value(SafeSearch::Strict), "Strict");
        assert_eq!(safe_search_value(SafeSearch::Moderate), "Moderate");
        assert_eq!(safe_search_value(SafeSearch::Off), "Off");
    }

    #[test]
    fn backend_type_is_bing() {
        let engine = BingEngine::new(reqwest::Client::new(), None);
        assert_eq!(engine.backend_type(), Backend::Bing);
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BingEngine>();
    }

    #[tokio::test]
    #[ignore] // Live test: run with `cargo test -- --ignored`
    async fn live_bing_search() {
        let engine = BingEngine::new(reqwest::Client::new(), None);
        let request = SearchRequest {
            keyword: "rust programming",
            max_results: 10,
            time_window: None,
            region: "en-us",
            safe_search: SafeSearch::Moderate,
        };
        let hits = engine.search(&request).await;
        assert!(hits.is_ok());
        let hits = hits.expect("live search should work");
        assert!(!hits.is_empty());
        for hit in &hits {
            assert!(!hit.href().is_empty());
        }
    }
}
