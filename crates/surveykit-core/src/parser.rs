//! Item file parser.
//!
//! Loads raw items from TOML and JSON files and directories, and validates
//! them. Loading never rejects duplicates or inconsistent titles; that is
//! what [`validate_items`] reports on.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{ItemId, RawItem, RESERVED_FIELDS};

/// On-disk encoding of an item file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFormat {
    Toml,
    Json,
}

impl ItemFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(ItemFormat::Toml),
            "json" => Some(ItemFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TomlItemFile {
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonItemFile {
    Bare(Vec<RawItem>),
    Wrapped { items: Vec<RawItem> },
}

/// Parse a single item file.
pub fn parse_item_file(path: &Path) -> Result<Vec<RawItem>> {
    let format = ItemFormat::from_path(path)
        .with_context(|| format!("unsupported item file extension: {}", path.display()))?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read item file: {}", path.display()))?;

    parse_items_str(&content, format)
        .with_context(|| format!("failed to parse item file: {}", path.display()))
}

/// Parse item file content that is already in memory.
pub fn parse_items_str(content: &str, format: ItemFormat) -> Result<Vec<RawItem>> {
    let items = match format {
        ItemFormat::Toml => toml::from_str::<TomlItemFile>(content)?.items,
        ItemFormat::Json => match serde_json::from_str::<JsonItemFile>(content)? {
            JsonItemFile::Bare(items) | JsonItemFile::Wrapped { items } => items,
        },
    };
    Ok(items)
}

/// Parse a file, or every item file under a directory.
pub fn load_items(path: &Path) -> Result<Vec<RawItem>> {
    if path.is_dir() {
        load_item_directory(path)
    } else {
        parse_item_file(path)
    }
}

/// Recursively load every `.toml` and `.json` item file under `dir`.
///
/// Files are visited in sorted path order so the resulting topic order is
/// stable. Files that fail to parse are skipped with a warning. Symlinks
/// are not followed.
pub fn load_item_directory(dir: &Path) -> Result<Vec<RawItem>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries: Vec<(PathBuf, std::fs::FileType)> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.and_then(|e| Ok((e.path(), e.file_type()?))))
        .collect::<std::io::Result<_>>()?;
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut items = Vec::new();
    for (path, file_type) in entries {
        if file_type.is_symlink() {
            tracing::debug!("not following symlink {}", path.display());
        } else if file_type.is_dir() {
            items.extend(load_item_directory(&path)?);
        } else if ItemFormat::from_path(&path).is_some() {
            match parse_item_file(&path) {
                Ok(parsed) => items.extend(parsed),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(items)
}

/// A warning from item validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    /// The item ID (if applicable).
    pub item_id: Option<ItemId>,
    /// Warning message.
    pub message: String,
}

/// Check a list of raw items for issues the store will not reject.
pub fn validate_items(items: &[RawItem]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate ids: the store resolves these to the first match
    let mut seen_ids = HashSet::new();
    for item in items {
        if !seen_ids.insert(item.item_id) {
            warnings.push(ValidationWarning {
                item_id: Some(item.item_id),
                message: format!(
                    "duplicate item ID: {} (lookups resolve to the first occurrence)",
                    item.item_id
                ),
            });
        }
    }

    for item in items {
        if item.topic_key.trim().is_empty() {
            warnings.push(ValidationWarning {
                item_id: Some(item.item_id),
                message: "topic key is empty".into(),
            });
        }
    }

    for item in items {
        for key in RESERVED_FIELDS {
            if item.extra.contains_key(key) {
                warnings.push(ValidationWarning {
                    item_id: Some(item.item_id),
                    message: format!("display field '{key}' is reserved and will be dropped on load"),
                });
            }
        }
    }

    // Titles are taken from the first item of each topic
    let mut first_titles: HashMap<&str, &str> = HashMap::new();
    for item in items {
        let first = *first_titles
            .entry(&item.topic_key)
            .or_insert(&item.topic_title);
        if first != item.topic_title {
            warnings.push(ValidationWarning {
                item_id: Some(item.item_id),
                message: format!(
                    "topic '{}' has title '{}' but was first titled '{}'",
                    item.topic_key, item.topic_title, first
                ),
            });
        }
    }

    warnings
}
