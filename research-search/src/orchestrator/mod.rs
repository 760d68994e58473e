//! Search orchestrator: keyword expansion, sequential querying, dedup.
//!
//! This module fans a topic out into query variants, queries each one
//! through the adapter in order, and deduplicates the concatenated hits
//! by normalised URL.

pub mod aggregate;
pub mod dedup;
pub mod expand;
pub mod search;
pub mod url_normalize;
