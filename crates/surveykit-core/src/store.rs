//! The progress-tracking item store.
//!
//! [`ProgressStore`] wires the registry to its two collaborators and exposes
//! the query surface a presentation layer calls. Derived views are computed
//! on every call from the current registry state.

use std::collections::HashMap;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::model::{Item, ItemId, OverallProgress, ProgressEntry, RawItem, TopicGroup};
use crate::progress;
use crate::registry::ItemRegistry;
use crate::topics;
use crate::traits::{EvenWidth, NoopSummary, SummarySink, WidthAllocator};

/// Item registry plus its topic and progress projections.
#[derive(Debug)]
pub struct ProgressStore<S = NoopSummary, W = EvenWidth> {
    registry: ItemRegistry,
    summary: S,
    widths: W,
    static_topic_offset: u32,
}

impl ProgressStore {
    /// A store with no-op summary and even width allocation.
    pub fn new() -> Self {
        Self::from_config(&StoreConfig::default())
    }

    /// A store whose offset and bar width come from `config`.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::with_collaborators(NoopSummary, EvenWidth::new(config.total_width))
            .with_topic_offset(config.static_topic_offset)
    }
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SummarySink, W: WidthAllocator> ProgressStore<S, W> {
    pub fn with_collaborators(summary: S, widths: W) -> Self {
        Self {
            registry: ItemRegistry::new(),
            summary,
            widths,
            static_topic_offset: 0,
        }
    }

    /// Set the value added to every topic group id.
    pub fn with_topic_offset(mut self, offset: u32) -> Self {
        self.static_topic_offset = offset;
        self
    }

    // -- Item registry ------------------------------------------------------

    pub fn load(&mut self, raw_items: impl IntoIterator<Item = RawItem>) {
        self.registry.load(raw_items, &mut self.summary);
    }

    pub fn try_load(&mut self, raw_items: Vec<RawItem>) -> Result<(), StoreError> {
        self.registry.try_load(raw_items, &mut self.summary)
    }

    pub fn find_by_item_id(&self, item_id: ItemId) -> Option<usize> {
        self.registry.find_by_item_id(item_id)
    }

    pub fn get(&self, item_id: ItemId) -> Option<&Item> {
        self.registry.get(item_id)
    }

    pub fn set_score(&mut self, item_id: ItemId, score: f64) {
        self.registry.set_score(item_id, score);
    }

    pub fn set_comment(&mut self, item_id: ItemId, comment: impl Into<String>) {
        self.registry.set_comment(item_id, comment);
    }

    pub fn toggle_fulfilled(&mut self, item_id: ItemId) {
        self.registry.toggle_fulfilled(item_id);
    }

    pub fn reset(&mut self) {
        self.registry.reset();
    }

    pub fn items(&self) -> &[Item] {
        self.registry.items()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.registry.version()
    }

    // -- Topic index --------------------------------------------------------

    pub fn topic_keys(&self) -> Vec<&str> {
        topics::topic_keys(self.items())
    }

    pub fn topic_titles(&self) -> HashMap<&str, &str> {
        topics::topic_titles(self.items())
    }

    pub fn groups(&self) -> Vec<TopicGroup<'_>> {
        topics::groups(self.items(), self.static_topic_offset)
    }

    // -- Progress aggregator ------------------------------------------------

    pub fn count_in_topic(&self, topic_key: &str) -> usize {
        progress::count_in_topic(self.items(), topic_key)
    }

    pub fn count_answered_in_topic(&self, topic_key: &str) -> usize {
        progress::count_answered_in_topic(self.items(), topic_key)
    }

    pub fn progress_report(&self) -> Vec<ProgressEntry> {
        progress::progress_report(self.items(), &self.widths)
    }

    pub fn is_complete(&self) -> bool {
        progress::is_complete(self.items(), &self.widths)
    }

    pub fn overall(&self) -> OverallProgress {
        progress::overall(self.items())
    }

    // -- Collaborators ------------------------------------------------------

    pub fn summary(&self) -> &S {
        &self.summary
    }

    pub fn widths(&self) -> &W {
        &self.widths
    }
}
