//! Hit deduplication by normalised URL.
//!
//! A single pass in arrival order: the first hit for each key wins, later
//! hits with the same key are dropped, and hits whose key is empty are
//! dropped outright. Surviving hits keep their relative order.

use std::collections::HashSet;

use crate::types::Hit;

use super::url_normalize::normalized_key;

/// Deduplicate hits by [`normalized_key`], keeping first occurrences.
pub fn deduplicate(hits: Vec<Hit>) -> Vec<Hit> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(hits.len());

    for hit in hits {
        let key = normalized_key(hit.href());
        if key.is_empty() {
            tracing::trace!(title = hit.title(), "dropping hit without a usable URL");
            continue;
        }
        if seen.insert(key) {
            unique.push(hit);
        }
    }

    unique
}
