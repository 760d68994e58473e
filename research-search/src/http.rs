//! The per-run HTTP client and User-Agent rotation.

use crate::config::SearchConfig;
use crate::error::SearchError;
use rand::seq::SliceRandom;
use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use std::time::Duration;

const MAX_REDIRECTS: usize = 10;

const BROWSER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 Edg/124.0.0.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:125.0) Gecko/20100101 Firefox/125.0",
];

/// Build the client shared by every keyword of a run.
///
/// Cookies are kept between requests (Bing sets its market cookie on the
/// first response) and `Accept-Language` follows the configured region.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed, which
/// in practice means the TLS backend failed to initialise.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
    );
    if let Ok(language) = HeaderValue::from_str(&accept_language(&config.region)) {
        headers.insert(ACCEPT_LANGUAGE, language);
    }

    reqwest::Client::builder()
        .default_headers(headers)
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// `en-us` → `en-US,en;q=0.9`. Anything not shaped like `lang-country` is
/// sent as-is.
fn accept_language(region: &str) -> String {
    match region.split_once('-') {
        Some((lang, country)) if !lang.is_empty() && !country.is_empty() => {
            format!(
                "{}-{},{};q=0.9",
                lang.to_ascii_lowercase(),
                country.to_ascii_uppercase(),
                lang.to_ascii_lowercase()
            )
        }
        _ => region.to_owned(),
    }
}

/// `custom` when configured, otherwise a fresh pick from the rotation.
pub fn user_agent(custom: Option<&str>) -> String {
    match custom {
        Some(ua) => ua.to_owned(),
        None => pick_user_agent(&mut rand::thread_rng()).to_owned(),
    }
}

fn pick_user_agent<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // Non-empty const slice; the fallback is unreachable.
    BROWSER_AGENTS
        .choose(rng)
        .copied()
        .unwrap_or(BROWSER_AGENTS[0])
}
