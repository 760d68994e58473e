//! Markdown encoding.

use research_search::Hit;
use serde_json::Value;

use super::Report;

const PREVIEW_CHARS: usize = 100;

/// Render `report` as a Markdown document.
///
/// The first hit's fields are logged at info level as a one-off
/// diagnostic; nothing of that dump reaches the returned text.
pub fn render(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Research Report: {}\n\n", report.query));

    out.push_str("## Search Overview\n\n");
    out.push_str(&format!(
        "- Generated: {}\n",
        report.timestamp.format("%Y-%m-%d %H:%M")
    ));
    out.push_str(&format!("- Keywords: {}\n", report.keywords.join(", ")));
    out.push_str(&format!(
        "- Results: {} (deduplicated)\n\n",
        report.total_results
    ));

    out.push_str("## Key Findings\n\n");
    for (i, hit) in report.results.iter().enumerate() {
        if i == 0 {
            log_field_previews(hit);
        }
        out.push_str(&format!("### {}. {}\n\n", i + 1, hit.title()));
        out.push_str(hit.body());
        out.push_str("\n\n");
        out.push_str(&format!(
            "> Source: [{}]({})\n\n",
            hit.title(),
            link_target(hit)
        ));
    }

    out.push_str("---\n\n## References\n\n");
    for (i, hit) in report.results.iter().enumerate() {
        out.push_str(&format!(
            "{}. [{}]({})\n",
            i + 1,
            hit.title(),
            link_target(hit)
        ));
    }

    out
}

fn link_target(hit: &Hit) -> &str {
    match hit.href() {
        "" => "#",
        href => href,
    }
}

fn log_field_previews(hit: &Hit) {
    for (field, preview) in field_previews(hit) {
        tracing::info!(field = %field, value = %preview, "first result field");
    }
}

/// Field names of `hit` paired with value previews of at most 100
/// characters. Only fields the hit carries are listed, named ones first.
pub fn field_previews(hit: &Hit) -> Vec<(String, String)> {
    let named = [
        ("title", &hit.title),
        ("href", &hit.href),
        ("body", &hit.body),
    ];
    let mut previews: Vec<(String, String)> = named
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name.to_owned(), truncate(v))))
        .collect();

    previews.extend(hit.extra.iter().map(|(name, value)| {
        let text = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        (name.clone(), truncate(&text))
    }));
    previews
}

fn truncate(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone};
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .map_err(|_| io::Error::other("log buffer poisoned"))?
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Render with a scoped subscriber and return the logged lines.
    fn render_capturing(report: &Report) -> (String, Vec<String>) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        let md = tracing::subscriber::with_default(subscriber, || render(report));
        let bytes = buffer.0.lock().map(|b| b.clone()).unwrap_or_default();
        let lines = String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_owned)
            .collect();
        (md, lines)
    }

    fn timestamp() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 59)
            .single()
            .expect("unambiguous time")
    }

    fn sample() -> Report {
        Report::new(
            "rust async",
            vec!["rust async".into(), "rust async latest".into()],
            vec![
                Hit::new("Tokio", "https://tokio.rs", "An asynchronous runtime."),
                Hit {
                    href: Some("https://docs.rs/futures".into()),
                    ..Default::default()
                },
            ],
            timestamp(),
        )
    }

    #[test]
    fn full_layout() {
        let expected = "\
# Research Report: rust async

## Search Overview

- Generated: 2024-03-09 14:05
- Keywords: rust async, rust async latest
- Results: 2 (deduplicated)

## Key Findings

### 1. Tokio

An asynchronous runtime.

> Source: [Tokio](https://tokio.rs)

### 2. untitled

no summary

> Source: [untitled](https://docs.rs/futures)

---

## References

1. [Tokio](https://tokio.rs)
2. [untitled](https://docs.rs/futures)
";
        assert_eq!(render(&sample()), expected);
    }

    #[test]
    fn empty_report_keeps_all_sections() {
        let report = Report::new("nothing", vec!["nothing".into()], vec![], timestamp());
        let md = render(&report);
        assert!(md.contains("- Results: 0 (deduplicated)"));
        assert!(md.contains("## Key Findings"));
        assert!(md.contains("## References"));
        assert!(!md.contains("### "));
    }

    #[test]
    fn missing_href_links_to_anchor() {
        let hit = Hit {
            title: Some("Orphan".into()),
            ..Default::default()
        };
        let report = Report::new("q", vec!["q".into()], vec![hit], timestamp());
        let md = render(&report);
        assert!(md.contains("> Source: [Orphan](#)"));
        assert!(md.contains("1. [Orphan](#)"));
    }

    #[test]
    fn previews_never_leak_into_document() {
        let hit = Hit::new("T", "https://t.dev", "b").with_extra("engine_score", json!(0.93));
        let report = Report::new("q", vec!["q".into()], vec![hit], timestamp());
        assert!(!render(&report).contains("engine_score"));
    }

    #[test]
    fn first_hit_fields_logged_once() {
        let (md, lines) = render_capturing(&sample());
        let dumped: Vec<&String> = lines
            .iter()
            .filter(|l| l.contains("first result field"))
            .collect();
        assert_eq!(dumped.len(), 3, "{lines:?}");
        assert!(dumped.iter().all(|l| l.contains("INFO")));
        assert!(dumped[0].contains("field=title"));
        assert!(dumped[0].contains("value=Tokio"));
        assert!(dumped[1].contains("value=https://tokio.rs"));
        assert!(!lines.iter().any(|l| l.contains("docs.rs/futures")));
        assert!(!md.contains("first result field"));
    }

    #[test]
    fn empty_report_logs_no_field_dump() {
        let report = Report::new("nothing", vec!["nothing".into()], vec![], timestamp());
        let (_, lines) = render_capturing(&report);
        assert!(lines.iter().all(|l| !l.contains("first result field")));
    }

    #[test]
    fn previews_list_only_present_fields() {
        let hit = Hit {
            title: Some("T".into()),
            ..Default::default()
        }
        .with_extra("source", json!("bing"))
        .with_extra("rank", json!(3));

        let previews = field_previews(&hit);
        let names: Vec<&str> = previews.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names.len(), 3);
        assert_eq!(names[0], "title");
        assert!(previews.contains(&("source".into(), "bing".into())));
        assert!(previews.contains(&("rank".into(), "3".into())));
    }

    #[test]
    fn previews_of_bare_hit_are_empty() {
        assert!(field_previews(&Hit::default()).is_empty());
    }

    #[test]
    fn previews_truncate_to_100_chars() {
        let long = "é".repeat(250);
        let hit = Hit::new("T", "https://t.dev", long);
        let body = &field_previews(&hit)[2].1;
        assert_eq!(body.chars().count(), 100);
    }
}
