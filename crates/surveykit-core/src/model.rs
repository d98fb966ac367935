//! Core data model types for surveykit.
//!
//! Raw input records, the stateful items the registry owns, and the two
//! derived views (topic groups and progress entries) computed from them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a single item.
pub type ItemId = i64;

/// An item as supplied by the caller, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawItem {
    /// Identifier, expected to be unique within one load.
    #[serde(alias = "itemId")]
    pub item_id: ItemId,
    /// Key of the topic this item belongs to.
    #[serde(alias = "topicKey")]
    pub topic_key: String,
    /// Human-readable topic title.
    #[serde(alias = "topicTitle")]
    pub topic_title: String,
    /// Display fields the store carries through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawItem {
    /// Build a raw item with no extra display fields.
    pub fn new(item_id: ItemId, topic_key: impl Into<String>, topic_title: impl Into<String>) -> Self {
        Self {
            item_id,
            topic_key: topic_key.into(),
            topic_title: topic_title.into(),
            extra: Map::new(),
        }
    }

    /// Attach an extra display field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// A registry-owned item: the raw record plus answer state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(flatten)]
    pub raw: RawItem,
    /// Score given by the respondent, if answered.
    #[serde(default)]
    pub score: Option<f64>,
    /// Free-text annotation, if any.
    #[serde(default)]
    pub comment: Option<String>,
    /// Whether the item applies. `false` means "not applicable".
    #[serde(default = "default_true")]
    pub fulfilled: bool,
}

fn default_true() -> bool {
    true
}

/// Keys `Item` serializes itself. Display fields with these names are
/// dropped during normalization.
pub const RESERVED_FIELDS: [&str; 3] = ["score", "comment", "fulfilled"];

impl Item {
    pub fn item_id(&self) -> ItemId {
        self.raw.item_id
    }

    pub fn topic_key(&self) -> &str {
        &self.raw.topic_key
    }

    pub fn topic_title(&self) -> &str {
        &self.raw.topic_title
    }

    /// An item counts as answered once it has a score or is marked not applicable.
    pub fn is_answered(&self) -> bool {
        self.score.is_some() || !self.fulfilled
    }
}

impl From<RawItem> for Item {
    fn from(mut raw: RawItem) -> Self {
        for key in RESERVED_FIELDS {
            if raw.extra.remove(key).is_some() {
                tracing::debug!(item_id = raw.item_id, key, "reserved display field dropped");
            }
        }
        Self {
            raw,
            score: None,
            comment: None,
            fulfilled: true,
        }
    }
}

/// All items sharing one topic key, in registry order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicGroup<'a> {
    /// `static_topic_offset` plus the 1-based position of the topic.
    /// Wider than the offset so the sum cannot overflow.
    pub id: u64,
    pub topic_key: &'a str,
    pub topic_title: &'a str,
    pub items: Vec<&'a Item>,
    /// Visibility state. Every freshly computed group starts collapsed.
    pub collapsed: bool,
}

impl TopicGroup<'_> {
    /// Flip the visibility of this group. The flag lives only on this view
    /// and is gone the next time groups are computed.
    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }
}

/// Completion of one topic, paired with its share of the progress bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub topic_key: String,
    pub topic_title: String,
    /// Share of the available width allocated to this topic.
    pub width_percentage: f64,
    /// Answered items as a percentage of the topic, 2 decimal places.
    pub progress_percent: f64,
    pub answered: usize,
    pub total: usize,
}

impl ProgressEntry {
    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }
}

/// Completion across every topic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    /// 0.0 for an empty registry.
    pub percent: f64,
    pub is_complete: bool,
}
