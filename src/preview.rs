//! Review screen state: page through the picked assets and adjust the
//! selection before confirming.
//!
//! The preview works on a snapshot of the selection taken when it opens.
//! Flipping an item only marks it; the original ordering is preserved so
//! that committing hands back the surviving ids in their insertion order.
//! Dismissing without committing leaves the live selection untouched.

use crate::selection::SelectionStore;
use crate::traits::AssetId;

/// One entry of the preview pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    pub asset_id: AssetId,
    pub selected: bool,
}

/// State of the full-screen preview pager.
#[derive(Debug, Clone, Default)]
pub struct PreviewState {
    items: Vec<PreviewItem>,
    current: usize,
}

impl PreviewState {
    /// Snapshots the current selection in insertion order, everything
    /// initially kept.
    pub fn from_selection(store: &SelectionStore) -> Self {
        Self {
            items: store
                .ordered_ids()
                .iter()
                .map(|&asset_id| PreviewItem {
                    asset_id,
                    selected: true,
                })
                .collect(),
            current: 0,
        }
    }

    // ===== Queries =====

    pub fn items(&self) -> &[PreviewItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the page currently shown.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> Option<&PreviewItem> {
        self.items.get(self.current)
    }

    /// Number of items still marked selected.
    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|item| item.selected).count()
    }

    /// Ids still marked selected, in the original selection order. This
    /// is what a commit writes back to the selection store.
    pub fn selected_ids(&self) -> Vec<AssetId> {
        self.items
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.asset_id)
            .collect()
    }

    // ===== Mutations =====

    /// Moves to another page; out-of-range indices are clamped.
    pub fn set_current(&mut self, index: usize) {
        if self.items.is_empty() {
            self.current = 0;
        } else {
            self.current = index.min(self.items.len() - 1);
        }
    }

    /// Flips the kept/dropped mark of the current page.
    pub fn toggle_current(&mut self) {
        if let Some(item) = self.items.get_mut(self.current) {
            item.selected = !item.selected;
        }
    }

    /// Writes the surviving ids back into the selection store.
    pub fn commit(&self, store: &mut SelectionStore) {
        store.replace_all(self.selected_ids());
    }
}
