//! JSON encoding.

use super::Report;
use crate::error::{ResearchError, Result};

/// Pretty-print `report`. Hits keep every field they arrived with, and
/// non-ASCII text is written unescaped.
pub fn render(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| ResearchError::Render(e.to_string()))
}
