//! Sequential per-keyword querying and concatenation.

use crate::adapter::SearchAdapter;
use crate::config::SearchConfig;
use crate::engine::SearchBackend;
use crate::types::Hit;

/// Query every keyword in order and concatenate the hits.
///
/// Calls are issued one at a time: each keyword's query completes before
/// the next one starts. The result preserves (keyword order, backend rank
/// order). A keyword whose query fails contributes nothing.
pub async fn aggregate<B: SearchBackend>(
    adapter: &SearchAdapter<B>,
    keywords: &[String],
    config: &SearchConfig,
) -> Vec<Hit> {
    let mut all_hits = Vec::new();

    for keyword in keywords {
        tracing::info!(keyword = %keyword, "searching");
        let hits = adapter
            .query(
                keyword,
                config.max_results,
                config.time_window,
                &config.region,
            )
            .await;
        all_hits.extend(hits);
    }

    tracing::debug!(total = all_hits.len(), "aggregated raw hits");
    all_hits
}
