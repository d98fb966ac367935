//! Progress snapshots with JSON output and markdown rendering.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{OverallProgress, ProgressEntry};
use crate::store::ProgressStore;
use crate::traits::{SummarySink, WidthAllocator};

/// The derived progress views of a store at one moment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Unique snapshot identifier.
    pub id: Uuid,
    /// When the snapshot was taken.
    pub created_at: DateTime<Utc>,
    /// Label shown in rendered output.
    pub title: String,
    /// Number of items in the registry.
    pub item_count: usize,
    /// Per-topic progress, in topic order.
    pub entries: Vec<ProgressEntry>,
    /// Progress across all topics.
    pub overall: OverallProgress,
    /// Whether every topic is fully answered.
    pub complete: bool,
}

impl ProgressSnapshot {
    /// Capture the current progress of `store`.
    pub fn capture<S, W>(store: &ProgressStore<S, W>, title: impl Into<String>) -> Self
    where
        S: SummarySink,
        W: WidthAllocator,
    {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            title: title.into(),
            item_count: store.len(),
            entries: store.progress_report(),
            overall: store.overall(),
            complete: store.is_complete(),
        }
    }

    /// Save the snapshot as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize snapshot")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
        Ok(())
    }

    /// Format the snapshot as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.title));
        md.push_str(&format!(
            "**Overall:** {}/{} answered ({:.2}%), {}\n\n",
            self.overall.answered,
            self.overall.total,
            self.overall.percent,
            if self.complete { "complete" } else { "incomplete" }
        ));

        if !self.entries.is_empty() {
            md.push_str("| Topic | Answered | Progress |\n");
            md.push_str("|-------|----------|----------|\n");
            for e in &self.entries {
                md.push_str(&format!(
                    "| {} | {}/{} | {:.2}% |\n",
                    e.topic_title, e.answered, e.total, e.progress_percent
                ));
            }
        }

        md
    }

    /// Topics that still have unanswered items.
    pub fn incomplete_topics(&self) -> impl Iterator<Item = &ProgressEntry> {
        self.entries.iter().filter(|e| !e.is_complete())
    }
}
