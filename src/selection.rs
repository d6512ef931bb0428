//! Ordered multi-selection with ordinal badges and a hard limit.
//!
//! The store keeps selected asset identifiers in insertion order. The
//! 1-based position of an entry is its ordinal, shown as a badge in the
//! grid. Removing an entry shifts every later ordinal down by one, so
//! ordinals are always a dense `1..=count()` sequence.

use thiserror::Error;

use crate::traits::AssetId;

/// Default maximum number of selectable assets.
pub const DEFAULT_SELECTION_LIMIT: usize = 30;

/// Error returned when an insert would exceed the configured limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selection limit of {limit} items reached")]
    LimitExceeded { limit: usize },
}

/// Describes the state change produced by one `toggle` call.
///
/// Callers re-render only the cells named here instead of reloading the
/// whole grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// The id was appended with this 1-based ordinal.
    Added { ordinal: usize },
    /// The id was removed; each listed entry now carries a new ordinal.
    Removed { shifted: Vec<(AssetId, usize)> },
}

/// Ordered set of selected asset identifiers.
///
/// Responsibilities:
/// - Membership toggling with insertion-order preservation
/// - Dense 1-based ordinal computation
/// - Enforcing the maximum selection count
///
/// The store has no UI side effects; presentation layers consume the
/// returned [`SelectionChange`] values.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    ids: Vec<AssetId>,
    limit: usize,
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SELECTION_LIMIT)
    }
}

impl SelectionStore {
    /// Creates an empty store with the given maximum count.
    pub fn new(limit: usize) -> Self {
        Self {
            ids: Vec::new(),
            limit: limit.max(1),
        }
    }

    // ===== Queries =====

    /// Returns the 1-based selection ordinal of an id, if selected.
    pub fn ordinal(&self, id: AssetId) -> Option<usize> {
        self.ids.iter().position(|&sel| sel == id).map(|pos| pos + 1)
    }

    /// Returns true when the id is currently selected.
    pub fn contains(&self, id: AssetId) -> bool {
        self.ids.contains(&id)
    }

    /// Selected identifiers in insertion order. This exact sequence is
    /// what the confirm action hands back to the caller.
    pub fn ordered_ids(&self) -> &[AssetId] {
        &self.ids
    }

    /// Number of selected assets.
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Returns true when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Configured maximum selection count.
    pub fn limit(&self) -> usize {
        self.limit
    }

    // ===== Mutations =====

    /// Toggles membership of an id.
    ///
    /// Selecting appends at ordinal `count + 1`; deselecting removes the
    /// entry and renumbers everything behind it. Toggling the same id
    /// twice in a row restores its original membership.
    ///
    /// # Errors
    /// [`SelectionError::LimitExceeded`] when inserting at the limit; the
    /// store is left unchanged.
    pub fn toggle(&mut self, id: AssetId) -> Result<SelectionChange, SelectionError> {
        if let Some(pos) = self.ids.iter().position(|&sel| sel == id) {
            self.ids.remove(pos);
            let shifted = self.ids[pos..]
                .iter()
                .enumerate()
                .map(|(i, &moved)| (moved, pos + 1 + i))
                .collect();
            Ok(SelectionChange::Removed { shifted })
        } else if self.ids.len() >= self.limit {
            Err(SelectionError::LimitExceeded { limit: self.limit })
        } else {
            self.ids.push(id);
            Ok(SelectionChange::Added {
                ordinal: self.ids.len(),
            })
        }
    }

    /// Replaces the whole selection, preserving the order of `ids`.
    ///
    /// Used when the preview screen commits its edits back. Anything
    /// beyond the limit is dropped.
    pub fn replace_all(&mut self, ids: Vec<AssetId>) {
        self.ids = ids;
        self.ids.truncate(self.limit);
    }
}
