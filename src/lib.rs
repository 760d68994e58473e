//! Deep research: multi-angle web search reports from one topic.
//!
//! A run takes a free-text topic through a linear pipeline:
//! Topic → Expansion → per-keyword search → Aggregation → Dedup → Report
//!
//! # Architecture
//!
//! - **Search**: [`research_search`] expands the topic, queries one web
//!   backend per keyword with failure isolation and deduplicates by URL
//! - **Report**: [`report`] renders the unique hits as Markdown or JSON
//! - **Run**: [`research`] wires configuration, search and output together

pub mod config;
pub mod error;
pub mod report;
pub mod research;

pub use config::{Overrides, ReportConfig, ResearchConfig};
pub use error::{ResearchError, Result};
pub use report::{Report, ReportFormat};
pub use research::{run, run_with, write_report};
