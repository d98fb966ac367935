//! Topic index: read-only projections of the registry by topic.
//!
//! Every function here recomputes from the item slice it is given. Nothing
//! is cached, so results always match the current registry contents.

use std::collections::{HashMap, HashSet};

use crate::model::{Item, TopicGroup};

/// Unique topic keys in order of first appearance.
pub fn topic_keys(items: &[Item]) -> Vec<&str> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(Item::topic_key)
        .filter(|key| seen.insert(*key))
        .collect()
}

/// Title of the first item bearing each topic key.
pub fn topic_titles(items: &[Item]) -> HashMap<&str, &str> {
    let mut titles = HashMap::new();
    for item in items {
        titles.entry(item.topic_key()).or_insert(item.topic_title());
    }
    titles
}

/// Group items by topic, preserving registry order inside each group.
///
/// Group ids are `offset` plus the 1-based topic position, and every group
/// comes back collapsed.
pub fn groups(items: &[Item], offset: u32) -> Vec<TopicGroup<'_>> {
    let mut by_key: HashMap<&str, Vec<&Item>> = HashMap::new();
    for item in items {
        by_key.entry(item.topic_key()).or_default().push(item);
    }
    let titles = topic_titles(items);

    topic_keys(items)
        .into_iter()
        .zip(1u64..)
        .map(|(key, position)| TopicGroup {
            id: u64::from(offset) + position,
            topic_key: key,
            topic_title: titles.get(key).copied().unwrap_or_default(),
            items: by_key.remove(key).unwrap_or_default(),
            collapsed: true,
        })
        .collect()
}
