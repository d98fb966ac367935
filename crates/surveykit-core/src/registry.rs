//! The item registry: the only owner of mutable item state.
//!
//! Lookups are linear scans in load order. When ids repeat, the first
//! matching item is the one every lookup and mutation resolves to.

use std::collections::HashMap;

use crate::error::StoreError;
use crate::model::{Item, ItemId, RawItem};
use crate::traits::SummarySink;

/// Holds the normalized item list and applies mutations to it.
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    items: Vec<Item>,
    version: u64,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every item with a normalized copy of `raw_items`, then hand
    /// the new list to `summary`.
    pub fn load<I, S>(&mut self, raw_items: I, summary: &mut S)
    where
        I: IntoIterator<Item = RawItem>,
        S: SummarySink + ?Sized,
    {
        self.items = raw_items.into_iter().map(Item::from).collect();
        self.version += 1;
        tracing::info!(items = self.items.len(), version = self.version, "registry loaded");
        summary.init_summary(&self.items);
    }

    /// Like [`load`](Self::load), but refuses input with repeated ids.
    ///
    /// On error the registry and the summary sink are left untouched.
    pub fn try_load<S>(&mut self, raw_items: Vec<RawItem>, summary: &mut S) -> Result<(), StoreError>
    where
        S: SummarySink + ?Sized,
    {
        check_unique_ids(&raw_items)?;
        self.load(raw_items, summary);
        Ok(())
    }

    /// Position of the first item with `item_id`.
    pub fn find_by_item_id(&self, item_id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.item_id() == item_id)
    }

    pub fn get(&self, item_id: ItemId) -> Option<&Item> {
        self.find_by_item_id(item_id).map(|idx| &self.items[idx])
    }

    /// Record a score. Unknown ids are ignored.
    pub fn set_score(&mut self, item_id: ItemId, score: f64) {
        self.update(item_id, "set_score", |item| item.score = Some(score));
    }

    /// Record a comment. Unknown ids are ignored.
    pub fn set_comment(&mut self, item_id: ItemId, comment: impl Into<String>) {
        let comment = comment.into();
        self.update(item_id, "set_comment", move |item| item.comment = Some(comment));
    }

    /// Flip `fulfilled` and clear the score, whichever way the flag moved.
    pub fn toggle_fulfilled(&mut self, item_id: ItemId) {
        self.update(item_id, "toggle_fulfilled", |item| {
            item.fulfilled = !item.fulfilled;
            item.score = None;
        });
    }

    /// Drop every item. The summary sink is not told about resets.
    pub fn reset(&mut self) {
        self.items.clear();
        self.version += 1;
        tracing::info!(version = self.version, "registry reset");
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bumped by every load, reset and applied mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn update(&mut self, item_id: ItemId, op: &'static str, apply: impl FnOnce(&mut Item)) {
        match self.find_by_item_id(item_id) {
            Some(idx) => {
                apply(&mut self.items[idx]);
                self.version += 1;
                tracing::debug!(item_id, op, version = self.version, "item updated");
            }
            None => {
                tracing::debug!(item_id, op, "no item with this id, ignoring");
            }
        }
    }
}

fn check_unique_ids(raw_items: &[RawItem]) -> Result<(), StoreError> {
    let mut seen: HashMap<ItemId, usize> = HashMap::with_capacity(raw_items.len());
    for (pos, raw) in raw_items.iter().enumerate() {
        if let Some(&first) = seen.get(&raw.item_id) {
            return Err(StoreError::DuplicateItemId {
                item_id: raw.item_id,
                first,
                second: pos,
            });
        }
        seen.insert(raw.item_id, pos);
    }
    Ok(())
}
