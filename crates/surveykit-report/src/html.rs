//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined. The stacked
//! progress bar gives each topic its allocated width and fills that share by
//! the topic's progress.

use anyhow::{Context, Result};
use std::path::Path;

use surveykit_core::report::ProgressSnapshot;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from a progress snapshot.
pub fn generate_html(snapshot: &ProgressSnapshot) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>surveykit progress — {}</title>\n",
        html_escape(&snapshot.title)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&snapshot.title)));
    html.push_str(&format!(
        "<p class=\"meta\">{} items | {} topics | {}/{} answered ({:.2}%) | {}</p>\n",
        snapshot.item_count,
        snapshot.entries.len(),
        snapshot.overall.answered,
        snapshot.overall.total,
        snapshot.overall.percent,
        snapshot.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    let (status_class, status_text) = if snapshot.complete {
        ("pass", "Complete")
    } else {
        ("fail", "Incomplete")
    };
    html.push_str(&format!(
        "<p class=\"status {status_class}\">{status_text}</p>\n"
    ));
    html.push_str("</header>\n");

    // Stacked bar
    if !snapshot.entries.is_empty() {
        html.push_str("<section class=\"bar\">\n");
        html.push_str(&generate_progress_bar(snapshot));
        html.push_str("</section>\n");
    }

    // Per-topic table
    html.push_str("<section class=\"topics\">\n");
    html.push_str("<h2>Topics</h2>\n");
    html.push_str("<table>\n");
    html.push_str("<thead><tr><th>Topic</th><th>Answered</th><th>Progress</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for e in &snapshot.entries {
        let class = if e.is_complete() { "pass" } else { "fail" };
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}/{}</td><td>{:.2}%</td></tr>\n",
            class,
            html_escape(&e.topic_title),
            e.answered,
            e.total,
            e.progress_percent
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(snapshot)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(snapshot: &ProgressSnapshot, path: &Path) -> Result<()> {
    let html = generate_html(snapshot);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

fn generate_progress_bar(snapshot: &ProgressSnapshot) -> String {
    let bar_height = 28;
    let max_width = 600.0;

    let total_width: f64 = snapshot.entries.iter().map(|e| e.width_percentage).sum();
    let scale = if total_width > 0.0 {
        max_width / total_width
    } else {
        0.0
    };

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        max_width as usize,
        bar_height
    );

    let mut x = 0.0;
    for e in &snapshot.entries {
        let width = e.width_percentage * scale;
        let filled = width * e.progress_percent / 100.0;

        let color = if e.progress_percent >= 100.0 {
            "#22c55e"
        } else if e.progress_percent >= 50.0 {
            "#eab308"
        } else {
            "#ef4444"
        };

        svg.push_str(&format!(
            "  <g><title>{}: {:.2}%</title>\n",
            html_escape(&e.topic_title),
            e.progress_percent
        ));
        svg.push_str(&format!(
            "    <rect x=\"{x:.1}\" y=\"0\" width=\"{width:.1}\" height=\"{bar_height}\" fill=\"var(--border)\"/>\n"
        ));
        svg.push_str(&format!(
            "    <rect x=\"{x:.1}\" y=\"0\" width=\"{filled:.1}\" height=\"{bar_height}\" fill=\"{color}\"/>\n"
        ));
        svg.push_str("  </g>\n");
        x += width;
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.status { display: inline-block; padding: 0.25rem 0.75rem; border-radius: 4px; font-weight: bold; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.pass { background: var(--pass); }
.fail { background: var(--fail); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use surveykit_core::model::{OverallProgress, ProgressEntry};

    fn make_snapshot() -> ProgressSnapshot {
        ProgressSnapshot {
            id: uuid::Uuid::nil(),
            created_at: chrono::Utc::now(),
            title: "Kitchen <audit>".into(),
            item_count: 3,
            entries: vec![
                ProgressEntry {
                    topic_key: "a".into(),
                    topic_title: "Storage".into(),
                    width_percentage: 50.0,
                    progress_percent: 50.0,
                    answered: 1,
                    total: 2,
                },
                ProgressEntry {
                    topic_key: "b".into(),
                    topic_title: "Cleaning".into(),
                    width_percentage: 50.0,
                    progress_percent: 100.0,
                    answered: 1,
                    total: 1,
                },
            ],
            overall: OverallProgress {
                total: 3,
                answered: 2,
                remaining: 1,
                percent: 66.67,
                is_complete: false,
            },
            complete: false,
        }
    }

    #[test]
    fn html_report_contains_required_elements() {
        let html = generate_html(&make_snapshot());

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("Storage"));
        assert!(html.contains("Cleaning"));
        assert!(html.contains("Incomplete"));
        assert!(html.contains("Kitchen &lt;audit&gt;"));
        assert!(!html.contains("Kitchen <audit>"));
    }

    #[test]
    fn bar_segments_follow_widths() {
        let svg = generate_progress_bar(&make_snapshot());
        assert!(svg.contains("x=\"0.0\" y=\"0\" width=\"300.0\""));
        assert!(svg.contains("x=\"300.0\" y=\"0\" width=\"300.0\""));
        assert!(svg.contains("width=\"150.0\""));
    }

    #[test]
    fn zero_widths_draw_empty_segments() {
        let mut snapshot = make_snapshot();
        for e in &mut snapshot.entries {
            e.width_percentage = 0.0;
        }
        let svg = generate_progress_bar(&snapshot);
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn html_report_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");

        write_html_report(&make_snapshot(), &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
