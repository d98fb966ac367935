//! Answer sheets: recorded answers replayed into a loaded store.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::ItemId;
use crate::store::ProgressStore;
use crate::traits::{SummarySink, WidthAllocator};

/// One respondent's answer to one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(alias = "itemId")]
    pub item_id: ItemId,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub comment: Option<String>,
    /// Desired "not applicable" state; absent leaves it unchanged.
    #[serde(default, alias = "notApplicable")]
    pub not_applicable: Option<bool>,
}

/// An ordered list of answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSheet {
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl AnswerSheet {
    /// Read an answer sheet from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read answer sheet: {}", path.display()))?;
        Self::parse_str(&content)
            .with_context(|| format!("failed to parse answer sheet: {}", path.display()))
    }

    pub fn parse_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Replay every answer into `store`, returning how many matched an item.
    ///
    /// The not-applicable flag is applied first because toggling it clears
    /// the score. Answers for unknown ids are skipped like any other
    /// mutation on a missing id.
    pub fn apply<S, W>(&self, store: &mut ProgressStore<S, W>) -> usize
    where
        S: SummarySink,
        W: WidthAllocator,
    {
        let mut applied = 0;
        for answer in &self.answers {
            let Some(item) = store.get(answer.item_id) else {
                tracing::debug!(item_id = answer.item_id, "answer for unknown item skipped");
                continue;
            };

            if let Some(not_applicable) = answer.not_applicable {
                if item.fulfilled == not_applicable {
                    store.toggle_fulfilled(answer.item_id);
                }
            }
            if let Some(score) = answer.score {
                store.set_score(answer.item_id, score);
            }
            if let Some(comment) = &answer.comment {
                store.set_comment(answer.item_id, comment.clone());
            }
            applied += 1;
        }
        tracing::info!(applied, total = self.answers.len(), "answer sheet applied");
        applied
    }
}
