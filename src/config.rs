//! Configuration for a research run.
//!
//! Settings come from three layers, lowest priority first: built-in
//! defaults, an optional TOML file, and command-line overrides.
//!
//! ```toml
//! expand = true
//!
//! [search]
//! backend = "bing"
//! max_results = 10
//! region = "en-us"
//! time_window = "w"
//! safe_search = "moderate"
//! timeout_seconds = 8
//!
//! [report]
//! format = "markdown"
//! ```

use research_search::{SearchConfig, TimeWindow};
use serde::Deserialize;
use std::path::Path;

use crate::error::{ResearchError, Result};
use crate::report::ReportFormat;

/// Top-level configuration for a research run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResearchConfig {
    /// Fan the topic out into query variants before searching.
    pub expand: bool,
    /// Backend and per-keyword request settings.
    pub search: SearchConfig,
    /// Output settings.
    pub report: ReportConfig,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            expand: true,
            search: SearchConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Encoding of the rendered report.
    pub format: ReportFormat,
}

/// Values supplied on the command line. `None` leaves the lower layer alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub max_results: Option<usize>,
    pub time_window: Option<TimeWindow>,
    pub region: Option<String>,
    pub no_expand: bool,
    pub format: Option<ReportFormat>,
}

impl ResearchConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ResearchError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| ResearchError::Config(format!("invalid {}: {e}", path.display())))
    }

    /// Apply command-line overrides on top of this configuration.
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(max_results) = overrides.max_results {
            self.search.max_results = max_results;
        }
        if overrides.time_window.is_some() {
            self.search.time_window = overrides.time_window;
        }
        if let Some(region) = overrides.region {
            self.search.region = region;
        }
        if overrides.no_expand {
            self.expand = false;
        }
        if let Some(format) = overrides.format {
            self.report.format = format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use research_search::Backend;

    #[test]
    fn defaults() {
        let config = ResearchConfig::default();
        assert!(config.expand);
        assert_eq!(config.report.format, ReportFormat::Markdown);
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn from_file_reads_all_sections() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("research.toml");
        std::fs::write(
            &path,
            r#"
expand = false

[search]
backend = "duckduckgo"
max_results = 25
region = "zh-cn"
time_window = "y"
safe_search = "off"

[report]
format = "json"
"#,
        )
        .expect("write config");

        let config = ResearchConfig::from_file(&path).expect("parse");
        assert!(!config.expand);
        assert_eq!(config.search.backend, Backend::DuckDuckGo);
        assert_eq!(config.search.max_results, 25);
        assert_eq!(config.search.region, "zh-cn");
        assert_eq!(config.search.time_window, Some(TimeWindow::Year));
        assert_eq!(config.report.format, ReportFormat::Json);
        // Unspecified keys keep their defaults.
        assert_eq!(config.search.timeout_seconds, 8);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").expect("write config");
        assert_eq!(
            ResearchConfig::from_file(&path).expect("parse"),
            ResearchConfig::default()
        );
    }

    #[test]
    fn from_file_nonexistent_returns_error() {
        let result = ResearchConfig::from_file(Path::new("/nonexistent/path/research.toml"));
        assert!(matches!(result, Err(ResearchError::Config(_))));
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").expect("write config");
        assert!(matches!(
            ResearchConfig::from_file(&path),
            Err(ResearchError::Config(_))
        ));
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let mut config = ResearchConfig::default();
        config.search.region = "de-de".into();
        config.search.time_window = Some(TimeWindow::Day);

        config.apply(Overrides {
            max_results: Some(0),
            format: Some(ReportFormat::Json),
            ..Default::default()
        });

        assert_eq!(config.search.max_results, 0);
        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.search.region, "de-de");
        assert_eq!(config.search.time_window, Some(TimeWindow::Day));
        assert!(config.expand);
    }

    #[test]
    fn no_expand_override_disables_expansion() {
        let mut config = ResearchConfig::default();
        config.apply(Overrides {
            no_expand: true,
            time_window: Some(TimeWindow::Week),
            region: Some("ja-jp".into()),
            ..Default::default()
        });
        assert!(!config.expand);
        assert_eq!(config.search.time_window, Some(TimeWindow::Week));
        assert_eq!(config.search.region, "ja-jp");
    }
}
