//! Picker configuration handed in by the hosting application.

use serde::{Deserialize, Serialize};

use crate::pagination::DEFAULT_PAGE_BATCH_SIZE;
use crate::selection::DEFAULT_SELECTION_LIMIT;

/// Default number of grid columns.
pub const DEFAULT_ITEMS_PER_ROW: usize = 3;

/// Construction-time configuration for a picker session.
///
/// Serializable so the GUI can persist it through eframe storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Maximum number of assets selectable at once.
    pub max_selection_limit: usize,
    /// Number of assets fetched per pagination request.
    pub page_batch_size: usize,
    /// Number of grid columns.
    pub items_per_row: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            max_selection_limit: DEFAULT_SELECTION_LIMIT,
            page_batch_size: DEFAULT_PAGE_BATCH_SIZE,
            items_per_row: DEFAULT_ITEMS_PER_ROW,
        }
    }
}

impl PickerConfig {
    /// Returns a copy with all fields clamped to workable minimums, so a
    /// hand-edited persisted config cannot zero out the grid.
    pub fn sanitized(self) -> Self {
        Self {
            max_selection_limit: self.max_selection_limit.max(1),
            page_batch_size: self.page_batch_size.max(1),
            items_per_row: self.items_per_row.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = PickerConfig::default();
        assert_eq!(config.max_selection_limit, 30);
        assert_eq!(config.page_batch_size, 100);
        assert_eq!(config.items_per_row, 3);
    }

    #[test]
    fn sanitized_clamps_zeroes() {
        let config = PickerConfig {
            max_selection_limit: 0,
            page_batch_size: 0,
            items_per_row: 0,
        }
        .sanitized();
        assert_eq!(config.max_selection_limit, 1);
        assert_eq!(config.page_batch_size, 1);
        assert_eq!(config.items_per_row, 1);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = PickerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PickerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
