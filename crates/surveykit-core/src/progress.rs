//! Progress aggregation: per-topic counts, percentages and completion.
//!
//! An item counts as answered once it has a score or is marked not
//! applicable, so N/A items never block completion.

use crate::model::{Item, OverallProgress, ProgressEntry};
use crate::topics;
use crate::traits::WidthAllocator;

/// Number of items in `topic_key`.
pub fn count_in_topic(items: &[Item], topic_key: &str) -> usize {
    items.iter().filter(|i| i.topic_key() == topic_key).count()
}

/// Number of answered items in `topic_key`.
pub fn count_answered_in_topic(items: &[Item], topic_key: &str) -> usize {
    items
        .iter()
        .filter(|i| i.topic_key() == topic_key && i.is_answered())
        .count()
}

/// `value / total` as a percentage rounded to 2 decimal places.
///
/// # Panics
///
/// Panics if `total` is zero. Topics are derived from items, so a topic
/// with no items means the index and registry disagree.
pub fn percent(value: usize, total: usize) -> f64 {
    assert!(total > 0, "percent of an empty total ({value}/{total})");
    round2(value as f64 / total as f64 * 100.0)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// One entry per topic, in topic order.
///
/// Width allocation only affects presentation. If the allocator fails or
/// returns the wrong number of widths, the missing widths become `0.0` and
/// the progress numbers are unaffected.
pub fn progress_report<W>(items: &[Item], widths: &W) -> Vec<ProgressEntry>
where
    W: WidthAllocator + ?Sized,
{
    let keys = topics::topic_keys(items);
    let titles = topics::topic_titles(items);
    let widths = allocate_widths(widths, keys.len());

    keys.into_iter()
        .zip(widths)
        .map(|(key, width_percentage)| {
            let total = count_in_topic(items, key);
            let answered = count_answered_in_topic(items, key);
            ProgressEntry {
                topic_key: key.to_string(),
                topic_title: titles.get(key).copied().unwrap_or_default().to_string(),
                width_percentage,
                progress_percent: percent(answered, total),
                answered,
                total,
            }
        })
        .collect()
}

fn allocate_widths<W>(allocator: &W, topic_count: usize) -> Vec<f64>
where
    W: WidthAllocator + ?Sized,
{
    let mut widths = match allocator.allocate(topic_count) {
        Ok(widths) => widths,
        Err(e) => {
            tracing::warn!("width allocation failed, using zero widths: {e:#}");
            Vec::new()
        }
    };
    if widths.len() != topic_count {
        if !widths.is_empty() {
            tracing::warn!(
                expected = topic_count,
                got = widths.len(),
                "width allocation returned the wrong number of widths"
            );
        }
        widths.resize(topic_count, 0.0);
    }
    widths
}

/// True when every topic is fully answered. Vacuously true with no topics.
pub fn is_complete<W>(items: &[Item], widths: &W) -> bool
where
    W: WidthAllocator + ?Sized,
{
    progress_report(items, widths)
        .iter()
        .all(ProgressEntry::is_complete)
}

/// Completion across all topics.
pub fn overall(items: &[Item]) -> OverallProgress {
    let total = items.len();
    let answered = items.iter().filter(|i| i.is_answered()).count();
    OverallProgress {
        total,
        answered,
        remaining: total - answered,
        percent: if total == 0 { 0.0 } else { percent(answered, total) },
        is_complete: answered == total,
    }
}
