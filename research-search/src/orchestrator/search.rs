//! Search orchestrator: expand, query each keyword in sequence, dedup.

use crate::adapter::SearchAdapter;
use crate::config::SearchConfig;
use crate::engine::SearchBackend;
use crate::types::Hit;

use super::aggregate::aggregate;
use super::dedup::deduplicate;
use super::expand::expand_keywords;

/// Keywords used and unique hits found for one topic.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// The keyword variants that were searched, in search order.
    pub keywords: Vec<String>,
    /// Deduplicated hits in first-seen order.
    pub hits: Vec<Hit>,
}

/// Whether the topic is fanned out into query variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expansion {
    /// Search every variant from [`expand_keywords`].
    #[default]
    Expand,
    /// Search the topic verbatim as the only keyword.
    Verbatim,
}

/// Run the full search pipeline for `topic`.
///
/// # Pipeline
///
/// 1. Expand the topic into keywords (or use it verbatim)
/// 2. Query each keyword in order through `adapter`
/// 3. Concatenate hits in (keyword, rank) order
/// 4. Deduplicate by normalised URL, first occurrence wins
///
/// Never fails: keywords whose query fails contribute no hits, and a run
/// with no hits at all yields an empty [`SearchOutcome::hits`].
pub async fn orchestrate_search<B: SearchBackend>(
    topic: &str,
    expansion: Expansion,
    adapter: &SearchAdapter<B>,
    config: &SearchConfig,
) -> SearchOutcome {
    let keywords = match expansion {
        Expansion::Expand => expand_keywords(topic),
        Expansion::Verbatim => vec![topic.to_owned()],
    };

    tracing::info!(
        keywords = %keywords.join(", "),
        backend = %adapter.backend(),
        "starting search"
    );

    let all_hits = aggregate(adapter, &keywords, config).await;
    let raw_count = all_hits.len();
    let hits = deduplicate(all_hits);

    tracing::info!(
        raw = raw_count,
        unique = hits.len(),
        "collected results (deduplicated)"
    );

    SearchOutcome { keywords, hits }
}
