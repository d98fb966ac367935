//! The `surveykit validate` command.

use std::path::PathBuf;

use anyhow::Result;

use surveykit_core::parser;
use surveykit_core::topics;
use surveykit_core::Item;

pub fn execute(items_path: PathBuf) -> Result<()> {
    let raw = parser::load_items(&items_path)?;

    let items: Vec<Item> = raw.iter().cloned().map(Item::from).collect();
    let topic_count = topics::topic_keys(&items).len();
    println!(
        "Items: {} ({} items, {} topics)",
        items_path.display(),
        raw.len(),
        topic_count
    );

    let warnings = parser::validate_items(&raw);
    for w in &warnings {
        let prefix = w
            .item_id
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All items valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
