//! Store error types.
//!
//! Mutations on unknown ids are silent no-ops, so the only typed failures
//! come from the strict load boundary.

use thiserror::Error;

use crate::model::ItemId;

/// Errors raised by the item store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Two input records share an id.
    #[error("duplicate item id {item_id} at positions {first} and {second}")]
    DuplicateItemId {
        item_id: ItemId,
        first: usize,
        second: usize,
    },
}

impl StoreError {
    /// The item id the error refers to.
    pub fn item_id(&self) -> ItemId {
        match self {
            StoreError::DuplicateItemId { item_id, .. } => *item_id,
        }
    }
}
