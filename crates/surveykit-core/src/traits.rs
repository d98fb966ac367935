//! Collaborator traits the store calls out to.
//!
//! Neither collaborator can influence score data: the summary sink only
//! observes loads, and width allocation is used for visual proportion.

use crate::model::Item;

// ---------------------------------------------------------------------------
// Summary collaborator
// ---------------------------------------------------------------------------

/// Receives the normalized item list once per load.
pub trait SummarySink {
    /// Called after every `load` with a borrowed view of the full list.
    fn init_summary(&mut self, items: &[Item]);
}

/// A summary sink that ignores every load.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSummary;

impl SummarySink for NoopSummary {
    fn init_summary(&mut self, _items: &[Item]) {}
}

impl<S: SummarySink + ?Sized> SummarySink for &mut S {
    fn init_summary(&mut self, items: &[Item]) {
        (**self).init_summary(items);
    }
}

impl<S: SummarySink + ?Sized> SummarySink for Box<S> {
    fn init_summary(&mut self, items: &[Item]) {
        (**self).init_summary(items);
    }
}

// ---------------------------------------------------------------------------
// Width allocation
// ---------------------------------------------------------------------------

/// Divides the available width of a progress bar across topics.
pub trait WidthAllocator {
    /// Return one width per topic, in topic order.
    fn allocate(&self, topic_count: usize) -> anyhow::Result<Vec<f64>>;
}

/// Splits a fixed total width evenly between topics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvenWidth {
    pub total: f64,
}

impl EvenWidth {
    pub fn new(total: f64) -> Self {
        Self { total }
    }
}

impl Default for EvenWidth {
    fn default() -> Self {
        Self { total: 100.0 }
    }
}

impl WidthAllocator for EvenWidth {
    fn allocate(&self, topic_count: usize) -> anyhow::Result<Vec<f64>> {
        anyhow::ensure!(
            self.total.is_finite() && self.total >= 0.0,
            "total width must be a non-negative number, got {}",
            self.total
        );
        if topic_count == 0 {
            return Ok(Vec::new());
        }
        let share = self.total / topic_count as f64;
        Ok(vec![share; topic_count])
    }
}

impl<F> WidthAllocator for F
where
    F: Fn(usize) -> anyhow::Result<Vec<f64>>,
{
    fn allocate(&self, topic_count: usize) -> anyhow::Result<Vec<f64>> {
        self(topic_count)
    }
}
