//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn surveykit() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("surveykit").unwrap()
}

const ITEMS: &str = r#"
[[items]]
item_id = 1
topic_key = "A"
topic_title = "Alpha"

[[items]]
item_id = 2
topic_key = "A"
topic_title = "Alpha"

[[items]]
item_id = 3
topic_key = "B"
topic_title = "Beta"
"#;

const PARTIAL_ANSWERS: &str = r#"
[[answers]]
item_id = 1
score = 5.0
"#;

const FULL_ANSWERS: &str = r#"
[[answers]]
item_id = 1
score = 5.0

[[answers]]
item_id = 2
score = 3.0

[[answers]]
item_id = 3
not_applicable = true
"#;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn validate_valid_items() {
    let dir = TempDir::new().unwrap();
    let items = write(dir.path(), "items.toml", ITEMS);

    surveykit()
        .arg("validate")
        .arg("--items")
        .arg(&items)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 items, 2 topics"))
        .stdout(predicate::str::contains("All items valid"));
}

#[test]
fn validate_reports_duplicates() {
    let dir = TempDir::new().unwrap();
    let items = write(
        dir.path(),
        "items.json",
        r#"[{"itemId": 1, "topicKey": "a", "topicTitle": "A"},
            {"itemId": 1, "topicKey": "a", "topicTitle": "A"}]"#,
    );

    surveykit()
        .arg("validate")
        .arg("--items")
        .arg(&items)
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] WARNING: duplicate item ID"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_directory() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.toml", ITEMS);
    write(
        dir.path(),
        "b.json",
        r#"{"items": [{"itemId": 4, "topicKey": "C", "topicTitle": "Gamma"}]}"#,
    );

    surveykit()
        .arg("validate")
        .arg("--items")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("4 items, 3 topics"));
}

#[test]
fn validate_nonexistent_file() {
    surveykit()
        .arg("validate")
        .arg("--items")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn report_text_with_partial_answers() {
    let dir = TempDir::new().unwrap();
    let items = write(dir.path(), "items.toml", ITEMS);
    let answers = write(dir.path(), "answers.toml", PARTIAL_ANSWERS);

    surveykit()
        .arg("report")
        .arg("--items")
        .arg(&items)
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("50.00%"))
        .stdout(predicate::str::contains("Overall: 1/3 answered (33.33%), incomplete"));
}

#[test]
fn report_json_is_complete_after_full_answers() {
    let dir = TempDir::new().unwrap();
    let items = write(dir.path(), "items.toml", ITEMS);
    let answers = write(dir.path(), "answers.toml", FULL_ANSWERS);

    let output = surveykit()
        .arg("report")
        .arg("--items")
        .arg(&items)
        .arg("--answers")
        .arg(&answers)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["complete"], serde_json::Value::Bool(true));
    assert_eq!(snapshot["entries"].as_array().unwrap().len(), 2);
    assert_eq!(snapshot["entries"][0]["topic_key"], "A");
    assert_eq!(snapshot["entries"][1]["progress_percent"], 100.0);
}

#[test]
fn report_fail_incomplete() {
    let dir = TempDir::new().unwrap();
    let items = write(dir.path(), "items.toml", ITEMS);

    surveykit()
        .arg("report")
        .arg("--items")
        .arg(&items)
        .arg("--fail-incomplete")
        .assert()
        .failure();
}

#[test]
fn report_html_to_file() {
    let dir = TempDir::new().unwrap();
    let items = write(dir.path(), "items.toml", ITEMS);
    let out = dir.path().join("out").join("report.html");

    surveykit()
        .arg("report")
        .arg("--items")
        .arg(&items)
        .arg("--format")
        .arg("html")
        .arg("--output")
        .arg(&out)
        .arg("--title")
        .arg("Site audit")
        .assert()
        .success()
        .stderr(predicate::str::contains("Report written to"));

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("Site audit"));
    assert!(html.contains("Beta"));
}

#[test]
fn report_markdown_to_file() {
    let dir = TempDir::new().unwrap();
    let items = write(dir.path(), "items.toml", ITEMS);
    let out = dir.path().join("nested").join("report.md");

    surveykit()
        .arg("report")
        .arg("--items")
        .arg(&items)
        .arg("--format")
        .arg("markdown")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Report written to"));

    let md = std::fs::read_to_string(&out).unwrap();
    assert!(md.contains("Beta"));
}

#[test]
fn report_write_failure_names_the_path() {
    let dir = TempDir::new().unwrap();
    let items = write(dir.path(), "items.toml", ITEMS);
    let out = dir.path().join("taken");
    std::fs::create_dir(&out).unwrap();

    surveykit()
        .arg("report")
        .arg("--items")
        .arg(&items)
        .arg("--format")
        .arg("text")
        .arg("--output")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write report to"));
}

#[test]
fn report_unknown_format() {
    let dir = TempDir::new().unwrap();
    let items = write(dir.path(), "items.toml", ITEMS);

    surveykit()
        .arg("report")
        .arg("--items")
        .arg(&items)
        .arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn report_uses_config_width() {
    let dir = TempDir::new().unwrap();
    let items = write(dir.path(), "items.toml", ITEMS);
    let config = write(dir.path(), "surveykit.toml", "total_width = 60.0\n");

    let output = surveykit()
        .arg("report")
        .arg("--items")
        .arg(&items)
        .arg("--config")
        .arg(&config)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(snapshot["entries"][0]["width_percentage"], 30.0);
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    surveykit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created surveykit.toml"))
        .stdout(predicate::str::contains("Created items/example.toml"));

    assert!(dir.path().join("surveykit.toml").exists());
    assert!(dir.path().join("items/example.toml").exists());
    assert!(dir.path().join("answers.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    surveykit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Second init should skip
    surveykit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_output_reports_cleanly() {
    let dir = TempDir::new().unwrap();

    surveykit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    surveykit()
        .current_dir(dir.path())
        .arg("report")
        .arg("--items")
        .arg("items")
        .arg("--answers")
        .arg("answers.toml")
        .arg("--format")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("| Emergency exits | 1/2 | 50.00% |"))
        .stdout(predicate::str::contains("| First aid | 1/2 | 50.00% |"));
}

#[test]
fn help_output() {
    surveykit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Survey progress tracking"));
}

#[test]
fn version_output() {
    surveykit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("surveykit"));
}
