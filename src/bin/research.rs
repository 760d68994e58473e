//! CLI binary for deep-research.
//!
//! The rendered report is the only thing written to stdout. Progress and
//! warnings go to stderr through `tracing`.

use clap::{Parser, ValueEnum};
use deep_research::{Overrides, ReportFormat, ResearchConfig};
use research_search::TimeWindow;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Search a topic from several angles and write a deduplicated report.
#[derive(Parser)]
#[command(name = "deep-research", version, about)]
struct Cli {
    /// Research topic.
    topic: String,

    /// Maximum results requested per keyword.
    #[arg(long = "max_results", value_name = "N")]
    max_results: Option<usize>,

    /// Only include results from the last day, week, month or year.
    #[arg(long, value_enum)]
    timelimit: Option<TimeLimitArg>,

    /// Region code forwarded to the search backend, e.g. en-us.
    #[arg(long)]
    region: Option<String>,

    /// Search the topic verbatim instead of expanding it.
    #[arg(long)]
    no_expand: bool,

    /// Write the report to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TimeLimitArg {
    D,
    W,
    M,
    Y,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Markdown,
    Json,
}

fn time_window(arg: TimeLimitArg) -> TimeWindow {
    match arg {
        TimeLimitArg::D => TimeWindow::Day,
        TimeLimitArg::W => TimeWindow::Week,
        TimeLimitArg::M => TimeWindow::Month,
        TimeLimitArg::Y => TimeWindow::Year,
    }
}

fn report_format(arg: FormatArg) -> ReportFormat {
    match arg {
        FormatArg::Markdown => ReportFormat::Markdown,
        FormatArg::Json => ReportFormat::Json,
    }
}

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "deep_research=info,research_search=info";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();

    let mut config = if let Some(ref path) = cli.config {
        ResearchConfig::from_file(path)?
    } else {
        ResearchConfig::default()
    };
    config.apply(Overrides {
        max_results: cli.max_results,
        time_window: cli.timelimit.map(time_window),
        region: cli.region,
        no_expand: cli.no_expand,
        format: cli.format.map(report_format),
    });

    let report = deep_research::run(&cli.topic, &config).await?;
    let rendered = report.render(config.report.format)?;
    deep_research::write_report(&rendered, cli.output.as_deref())?;

    Ok(())
}
