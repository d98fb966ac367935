//! surveykit-core — Item registry, topic index, and progress aggregation.
//!
//! This crate holds the in-memory state of a quiz or survey: a flat list of
//! items grouped by topic, each answerable with a score and comment, plus
//! the per-topic and overall progress derived from them.

pub mod answers;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod progress;
pub mod registry;
pub mod report;
pub mod store;
pub mod topics;
pub mod traits;

pub use error::StoreError;
pub use model::{Item, ItemId, OverallProgress, ProgressEntry, RawItem, TopicGroup};
pub use store::ProgressStore;
