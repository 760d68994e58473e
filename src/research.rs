//! One research run: search a topic, build the report, deliver it.

use std::io::Write;
use std::path::Path;

use chrono::Local;
use research_search::orchestrator::search::orchestrate_search;
use research_search::{Expansion, SearchAdapter, SearchBackend};

use crate::config::ResearchConfig;
use crate::error::{ResearchError, Result};
use crate::report::Report;

/// Run the full pipeline for `topic` against the configured web backend.
///
/// # Errors
///
/// Fails only at startup: [`ResearchError::Config`] for invalid search
/// settings and [`ResearchError::Capability`] when the HTTP client cannot
/// be built. Per-keyword failures only reduce the hit count.
pub async fn run(topic: &str, config: &ResearchConfig) -> Result<Report> {
    let adapter = SearchAdapter::from_config(&config.search)?;
    Ok(run_with(topic, config, &adapter).await)
}

/// Run the pipeline with an already-built adapter.
pub async fn run_with<B: SearchBackend>(
    topic: &str,
    config: &ResearchConfig,
    adapter: &SearchAdapter<B>,
) -> Report {
    let expansion = if config.expand {
        Expansion::Expand
    } else {
        Expansion::Verbatim
    };
    let outcome = orchestrate_search(topic, expansion, adapter, &config.search).await;
    Report::from_outcome(topic, outcome, Local::now())
}

/// Deliver a rendered report to `output`, or to stdout when `None`.
///
/// # Errors
///
/// Returns [`ResearchError::Sink`] if the file cannot be written and
/// [`ResearchError::Io`] if stdout is closed.
pub fn write_report(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|source| ResearchError::Sink {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), "report saved");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}
