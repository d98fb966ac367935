//! The `surveykit report` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use surveykit_core::answers::AnswerSheet;
use surveykit_core::config::load_config_from;
use surveykit_core::parser;
use surveykit_core::report::ProgressSnapshot;
use surveykit_core::ProgressStore;
use surveykit_report::html::{generate_html, write_html_report};

pub struct ReportArgs {
    pub items: PathBuf,
    pub answers: Option<PathBuf>,
    pub format: String,
    pub output: Option<PathBuf>,
    pub title: String,
    pub config: Option<PathBuf>,
    pub fail_incomplete: bool,
}

pub fn execute(args: ReportArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    let raw = parser::load_items(&args.items)?;
    let mut store = ProgressStore::from_config(&config);
    store.load(raw);

    if let Some(path) = &args.answers {
        let sheet = AnswerSheet::load(path)?;
        let applied = sheet.apply(&mut store);
        if applied < sheet.answers.len() {
            eprintln!(
                "Warning: {} answer(s) refer to unknown items and were skipped",
                sheet.answers.len() - applied
            );
        }
    }

    let snapshot = ProgressSnapshot::capture(&store, args.title);

    match &args.output {
        Some(path) => {
            match args.format.as_str() {
                "json" => snapshot.save_json(path)?,
                "html" => write_html_report(&snapshot, path)?,
                format => {
                    let rendered = render(&snapshot, format)?;
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent).with_context(|| {
                            format!("failed to create directory: {}", parent.display())
                        })?;
                    }
                    std::fs::write(path, rendered)
                        .with_context(|| format!("failed to write report to {}", path.display()))?;
                }
            }
            eprintln!("Report written to: {}", path.display());
        }
        None => println!("{}", render(&snapshot, &args.format)?),
    }

    if args.fail_incomplete && !snapshot.complete {
        std::process::exit(1);
    }

    Ok(())
}

fn render(snapshot: &ProgressSnapshot, format: &str) -> Result<String> {
    Ok(match format {
        "json" => serde_json::to_string_pretty(snapshot)?,
        "markdown" | "md" => snapshot.to_markdown(),
        "html" => generate_html(snapshot),
        "text" => render_text(snapshot),
        other => anyhow::bail!("unknown format: {other} (expected text, json, markdown or html)"),
    })
}

fn render_text(snapshot: &ProgressSnapshot) -> String {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Topic", "Answered", "Progress", "Width"]);

    for e in &snapshot.entries {
        table.add_row(vec![
            Cell::new(&e.topic_title),
            Cell::new(format!("{}/{}", e.answered, e.total)),
            Cell::new(format!("{:.2}%", e.progress_percent)),
            Cell::new(format!("{:.2}", e.width_percentage)),
        ]);
    }

    let status = if snapshot.complete {
        "complete"
    } else {
        "incomplete"
    };
    format!(
        "{table}\n\nOverall: {}/{} answered ({:.2}%), {status}",
        snapshot.overall.answered, snapshot.overall.total, snapshot.overall.percent
    )
}
