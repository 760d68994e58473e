//! Research report model and its two encodings.

pub mod json;
pub mod markdown;

use chrono::{DateTime, Local};
use research_search::{Hit, SearchOutcome};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Output encoding of a rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Narrative document for people.
    #[default]
    Markdown,
    /// Pretty-printed object for tools.
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Markdown => f.write_str("markdown"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Everything a run produced: the topic, the keywords searched and the
/// unique hits in first-seen order.
///
/// `total_results` always equals `results.len()` for reports built with
/// [`Report::new`] or [`Report::from_outcome`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub query: String,
    pub keywords: Vec<String>,
    pub timestamp: DateTime<Local>,
    pub total_results: usize,
    pub results: Vec<Hit>,
}

impl Report {
    pub fn new(
        query: impl Into<String>,
        keywords: Vec<String>,
        results: Vec<Hit>,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            query: query.into(),
            keywords,
            timestamp,
            total_results: results.len(),
            results,
        }
    }

    /// Build a report from a finished search.
    pub fn from_outcome(query: &str, outcome: SearchOutcome, timestamp: DateTime<Local>) -> Self {
        Self::new(query, outcome.keywords, outcome.hits, timestamp)
    }

    /// Render in the requested encoding.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ResearchError::Render`] if JSON serialization fails.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Markdown => Ok(markdown::render(self)),
            ReportFormat::Json => json::render(self),
        }
    }
}
