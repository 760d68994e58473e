//! Core types for raw search hits and backend request options.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Title used when a hit has none.
pub const DEFAULT_TITLE: &str = "untitled";
/// Body used when a hit has no snippet.
pub const DEFAULT_BODY: &str = "no summary";

/// A single raw search hit as returned by a backend.
///
/// The three named fields are optional so that a missing value is an
/// explicit `None` rather than an empty string; use the accessors for the
/// documented defaults. Any other field a backend attaches lands in
/// [`Hit::extra`] and survives serialization unchanged.
///
/// An explicit `null` for one of the named fields deserializes to `None`
/// and is omitted on output. The built-in engines never produce one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Snippet summarising the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Target URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Fields beyond title/body/href, passed through opaquely.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Hit {
    /// Build a hit with all three named fields present.
    pub fn new(
        title: impl Into<String>,
        href: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
            href: Some(href.into()),
            extra: Map::new(),
        }
    }

    /// Attach an extra pass-through field.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The title, or [`DEFAULT_TITLE`] when absent.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// The snippet, or [`DEFAULT_BODY`] when absent.
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or(DEFAULT_BODY)
    }

    /// The URL, or `""` when absent.
    pub fn href(&self) -> &str {
        self.href.as_deref().unwrap_or("")
    }
}

/// Search backends the adapter can be pinned to for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Bing HTML results.
    #[default]
    Bing,
    /// DuckDuckGo's JavaScript-free HTML endpoint.
    DuckDuckGo,
}

impl Backend {
    /// Returns the human-readable name of this backend.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bing => "Bing",
            Self::DuckDuckGo => "DuckDuckGo",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Provider-side recency filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeWindow {
    #[serde(rename = "d", alias = "day")]
    Day,
    #[serde(rename = "w", alias = "week")]
    Week,
    #[serde(rename = "m", alias = "month")]
    Month,
    #[serde(rename = "y", alias = "year")]
    Year,
}

impl TimeWindow {
    /// Single-letter code (`d`, `w`, `m`, `y`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Day => "d",
            Self::Week => "w",
            Self::Month => "m",
            Self::Year => "y",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Safe-search level requested from the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafeSearch {
    Strict,
    #[default]
    Moderate,
    Off,
}
