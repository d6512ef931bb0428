//! Continuous drag-to-select over a grid of cells.
//!
//! A drag session converts pointer motion into discrete toggle events:
//! every cell index between the anchor (where the gesture began) and the
//! current pointer position is toggled exactly once per drag, no matter
//! how many move events the toolkit delivers or how often the pointer
//! sweeps back and forth. Near the viewport edges the session requests
//! auto-scroll so the sweep can continue past the visible rows.

use std::collections::HashSet;

use crate::selection::{SelectionChange, SelectionError, SelectionStore};
use crate::traits::AssetId;

/// Classification of one pointer move event.
///
/// Decided from the raw velocity vector alone: motion dominated by the
/// scroll axis (vertical, for a vertically scrolling grid) is treated as
/// scroll intent and must not toggle cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureDecision {
    /// Horizontal-dominant motion: toggle the swept cells.
    Toggle,
    /// Vertical-dominant motion: defer to scrolling for this event.
    Scroll,
}

impl GestureDecision {
    /// Classifies a move event from its velocity components.
    pub fn from_velocity(vx: f32, vy: f32) -> Self {
        if vy.abs() > vx.abs() {
            GestureDecision::Scroll
        } else {
            GestureDecision::Toggle
        }
    }
}

/// Pointer proximity to the scrollable viewport's edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeProximity {
    None,
    Top,
    Bottom,
}

/// Direction of the continuous auto-scroll run while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoScroll {
    Up,
    Down,
}

/// Result of feeding one move event into the drag session.
#[derive(Debug, Default)]
pub struct DragUpdate {
    /// Cells toggled by this event, with the selection change each one
    /// produced, in sweep order.
    pub toggles: Vec<(usize, SelectionChange)>,
    /// Set on the first move event that ran into the selection limit.
    /// Raised at most once per drag so the caller alerts only once.
    pub limit_hit: bool,
}

/// State of one drag-select gesture.
///
/// Responsibilities:
/// - Tracking the anchor index and the per-drag toggled set
/// - Guaranteeing each index toggles at most once per drag
/// - Stopping further additions after the selection limit is hit
/// - Carrying the auto-scroll direction while the pointer hugs an edge
///
/// The session lives from gesture start to gesture end or cancel; both
/// exit paths go through [`DragSelectState::end`], which also stops
/// auto-scroll.
#[derive(Debug, Clone, Default)]
pub struct DragSelectState {
    anchor: Option<usize>,
    toggled: HashSet<usize>,
    limit_reached: bool,
    limit_notified: bool,
    auto_scroll: Option<AutoScroll>,
}

impl DragSelectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a drag gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Current auto-scroll request, if the pointer is near an edge.
    pub fn auto_scroll(&self) -> Option<AutoScroll> {
        self.auto_scroll
    }

    /// Starts a drag session.
    ///
    /// `anchor` is the cell index under the pointer, or `None` when the
    /// gesture began outside the grid (the session is then inert).
    pub fn begin(&mut self, anchor: Option<usize>) {
        self.anchor = anchor;
        self.toggled.clear();
        self.limit_reached = false;
        self.limit_notified = false;
        self.auto_scroll = None;
    }

    /// Feeds one pointer move event into the session.
    ///
    /// Toggles every not-yet-toggled index in the span between the anchor
    /// and `current` through the selection store. `loaded_ids` maps grid
    /// indices to asset identifiers; indices beyond it are skipped.
    pub fn update(
        &mut self,
        current: Option<usize>,
        decision: GestureDecision,
        edge: EdgeProximity,
        loaded_ids: &[AssetId],
        store: &mut SelectionStore,
    ) -> DragUpdate {
        let mut update = DragUpdate::default();
        if !self.is_active() {
            return update;
        }

        self.auto_scroll = match edge {
            EdgeProximity::Top => Some(AutoScroll::Up),
            EdgeProximity::Bottom => Some(AutoScroll::Down),
            EdgeProximity::None => None,
        };

        // Scroll-intent motion keeps the session alive but toggles nothing.
        if decision == GestureDecision::Scroll {
            return update;
        }

        let (anchor, current) = match (self.anchor, current) {
            (Some(a), Some(c)) => (a, c),
            _ => return update,
        };

        let span = anchor.min(current)..=anchor.max(current);
        for index in span {
            if self.toggled.contains(&index) {
                continue;
            }
            let Some(&id) = loaded_ids.get(index) else {
                continue;
            };
            // Past the limit only removals may proceed; additions would
            // fail again and spam the error.
            if self.limit_reached && !store.contains(id) {
                continue;
            }
            match store.toggle(id) {
                Ok(change) => {
                    self.toggled.insert(index);
                    update.toggles.push((index, change));
                }
                Err(SelectionError::LimitExceeded { .. }) => {
                    self.limit_reached = true;
                    if !self.limit_notified {
                        self.limit_notified = true;
                        update.limit_hit = true;
                    }
                }
            }
        }
        update
    }

    /// Ends or cancels the drag session: clears the anchor, the toggled
    /// set and the auto-scroll request.
    pub fn end(&mut self) {
        self.anchor = None;
        self.toggled.clear();
        self.limit_reached = false;
        self.limit_notified = false;
        self.auto_scroll = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: u64) -> Vec<AssetId> {
        (100..100 + n).collect()
    }

    fn toggle_event() -> GestureDecision {
        GestureDecision::Toggle
    }

    #[test]
    fn sweep_toggles_each_index_exactly_once() {
        let loaded = ids(10);

        // One coarse move event covering the whole span.
        let mut store_a = SelectionStore::new(30);
        let mut drag_a = DragSelectState::new();
        drag_a.begin(Some(2));
        drag_a.update(Some(7), toggle_event(), EdgeProximity::None, &loaded, &mut store_a);
        drag_a.end();

        // Fifty fine-grained move events over the same path.
        let mut store_b = SelectionStore::new(30);
        let mut drag_b = DragSelectState::new();
        drag_b.begin(Some(2));
        for step in 0..50 {
            let index = 2 + (step * 5) / 49;
            drag_b.update(Some(index), toggle_event(), EdgeProximity::None, &loaded, &mut store_b);
        }
        drag_b.end();

        assert_eq!(store_a.ordered_ids(), store_b.ordered_ids());
        for index in 2..=7usize {
            assert!(store_a.contains(loaded[index]));
        }
        assert_eq!(store_a.count(), 6);
    }

    #[test]
    fn sweeping_back_does_not_retoggle() {
        let loaded = ids(10);
        let mut store = SelectionStore::new(30);
        let mut drag = DragSelectState::new();

        drag.begin(Some(4));
        drag.update(Some(8), toggle_event(), EdgeProximity::None, &loaded, &mut store);
        // Pointer returns over already swept cells.
        drag.update(Some(5), toggle_event(), EdgeProximity::None, &loaded, &mut store);
        drag.update(Some(8), toggle_event(), EdgeProximity::None, &loaded, &mut store);
        drag.end();

        for index in 4..=8usize {
            assert!(store.contains(loaded[index]), "index {index} lost its toggle");
        }
    }

    #[test]
    fn separate_drags_may_toggle_the_same_cells_again() {
        let loaded = ids(4);
        let mut store = SelectionStore::new(30);
        let mut drag = DragSelectState::new();

        drag.begin(Some(0));
        drag.update(Some(3), toggle_event(), EdgeProximity::None, &loaded, &mut store);
        drag.end();
        assert_eq!(store.count(), 4);

        drag.begin(Some(0));
        drag.update(Some(3), toggle_event(), EdgeProximity::None, &loaded, &mut store);
        drag.end();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn vertical_motion_defers_to_scrolling() {
        let loaded = ids(10);
        let mut store = SelectionStore::new(30);
        let mut drag = DragSelectState::new();

        drag.begin(Some(0));
        let update = drag.update(
            Some(6),
            GestureDecision::from_velocity(2.0, -9.0),
            EdgeProximity::None,
            &loaded,
            &mut store,
        );
        assert!(update.toggles.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn limit_notifies_once_and_stops_additions() {
        let loaded = ids(10);
        let mut store = SelectionStore::new(3);
        let mut drag = DragSelectState::new();

        drag.begin(Some(0));
        let update = drag.update(Some(9), toggle_event(), EdgeProximity::None, &loaded, &mut store);
        assert_eq!(store.count(), 3);
        assert!(update.limit_hit);

        // Further moves in the same drag stay quiet.
        let update = drag.update(Some(9), toggle_event(), EdgeProximity::None, &loaded, &mut store);
        assert!(!update.limit_hit);
        assert!(update.toggles.is_empty());
        drag.end();
    }

    #[test]
    fn edge_proximity_drives_auto_scroll() {
        let loaded = ids(10);
        let mut store = SelectionStore::new(30);
        let mut drag = DragSelectState::new();

        drag.begin(Some(0));
        drag.update(Some(1), toggle_event(), EdgeProximity::Bottom, &loaded, &mut store);
        assert_eq!(drag.auto_scroll(), Some(AutoScroll::Down));

        drag.update(Some(1), toggle_event(), EdgeProximity::None, &loaded, &mut store);
        assert_eq!(drag.auto_scroll(), None);

        drag.update(Some(1), toggle_event(), EdgeProximity::Top, &loaded, &mut store);
        assert_eq!(drag.auto_scroll(), Some(AutoScroll::Up));

        // Every exit path stops auto-scroll.
        drag.end();
        assert_eq!(drag.auto_scroll(), None);
        assert!(!drag.is_active());
    }

    #[test]
    fn gesture_started_outside_the_grid_is_inert() {
        let loaded = ids(4);
        let mut store = SelectionStore::new(30);
        let mut drag = DragSelectState::new();

        drag.begin(None);
        let update = drag.update(Some(2), toggle_event(), EdgeProximity::None, &loaded, &mut store);
        assert!(update.toggles.is_empty());
        assert!(store.is_empty());
    }
}
