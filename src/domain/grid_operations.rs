//! Grid geometry: cell sizing, index mapping, near-end and edge checks.
//!
//! All functions take viewport metrics and the display scale as explicit
//! parameters instead of reading ambient screen state, so they stay
//! testable and correct on mixed-DPI setups.

use rpicker::EdgeProximity;

/// Gap between adjacent cells, in points.
pub const GRID_SPACING: f32 = 4.0;
/// Inset around the whole grid, in points.
pub const GRID_INSET: f32 = 4.0;
/// Distance from the viewport's top/bottom edge that engages
/// auto-scroll while drag-selecting, in points.
pub const EDGE_SCROLL_MARGIN: f32 = 48.0;
/// Auto-scroll speed while drag-selecting, in points per second.
pub const AUTO_SCROLL_VELOCITY: f32 = 600.0;
/// Number of trailing rows that count as "near the end" for pagination.
pub const NEAR_END_ROW_BUFFER: f32 = 4.0;

/// Side length of one square cell for the given viewport width.
pub fn cell_size(viewport_width: f32, items_per_row: usize) -> f32 {
    let per_row = items_per_row.max(1) as f32;
    let total_spacing = 2.0 * GRID_INSET + (per_row - 1.0) * GRID_SPACING;
    ((viewport_width - total_spacing) / per_row).max(1.0)
}

/// Pixel size to request thumbnails at, for crisp rendering on scaled
/// displays.
pub fn thumbnail_pixel_size(cell_size: f32, display_scale: f32) -> u32 {
    (cell_size * display_scale.max(1.0)).round().max(1.0) as u32
}

/// Number of rows needed for `count` items.
pub fn row_count(count: usize, items_per_row: usize) -> usize {
    let per_row = items_per_row.max(1);
    count.div_ceil(per_row)
}

/// Total grid content height, including insets.
pub fn grid_height(count: usize, items_per_row: usize, cell_size: f32) -> f32 {
    let rows = row_count(count, items_per_row);
    if rows == 0 {
        return 2.0 * GRID_INSET;
    }
    2.0 * GRID_INSET + rows as f32 * cell_size + (rows - 1) as f32 * GRID_SPACING
}

/// Top-left corner of a cell, relative to the grid origin.
pub fn cell_origin(index: usize, items_per_row: usize, cell_size: f32) -> (f32, f32) {
    let per_row = items_per_row.max(1);
    let col = index % per_row;
    let row = index / per_row;
    (
        GRID_INSET + col as f32 * (cell_size + GRID_SPACING),
        GRID_INSET + row as f32 * (cell_size + GRID_SPACING),
    )
}

/// Cell index under a point given relative to the grid origin.
///
/// Points in the spacing between cells resolve to the nearest cell on
/// their row; points outside the populated area return `None`.
pub fn index_at_point(
    x: f32,
    y: f32,
    items_per_row: usize,
    cell_size: f32,
    count: usize,
) -> Option<usize> {
    if x < GRID_INSET || y < GRID_INSET {
        return None;
    }
    let pitch = cell_size + GRID_SPACING;
    let col = ((x - GRID_INSET) / pitch) as usize;
    let row = ((y - GRID_INSET) / pitch) as usize;
    if col >= items_per_row.max(1) {
        return None;
    }
    let index = row * items_per_row.max(1) + col;
    (index < count).then_some(index)
}

/// Range of indices whose rows intersect the visible viewport.
pub fn visible_index_range(
    scroll_offset: f32,
    viewport_height: f32,
    items_per_row: usize,
    cell_size: f32,
    count: usize,
) -> std::ops::Range<usize> {
    let per_row = items_per_row.max(1);
    let pitch = cell_size + GRID_SPACING;
    let first_row = ((scroll_offset - GRID_INSET) / pitch).floor().max(0.0) as usize;
    let last_row = ((scroll_offset + viewport_height - GRID_INSET) / pitch).ceil().max(0.0) as usize;
    let start = (first_row * per_row).min(count);
    let end = ((last_row + 1) * per_row).min(count);
    start..end
}

/// Returns true when the scroll position is within the trailing buffer
/// of the content, which should trigger the next page fetch.
pub fn near_end(scroll_offset: f32, viewport_height: f32, content_height: f32, cell_size: f32) -> bool {
    let remaining = content_height - (scroll_offset + viewport_height);
    remaining <= NEAR_END_ROW_BUFFER * (cell_size + GRID_SPACING)
}

/// Classifies pointer proximity to the scrollable viewport's edges.
pub fn edge_proximity(pointer_y: f32, viewport_top: f32, viewport_bottom: f32) -> EdgeProximity {
    if pointer_y <= viewport_top + EDGE_SCROLL_MARGIN {
        EdgeProximity::Top
    } else if pointer_y >= viewport_bottom - EDGE_SCROLL_MARGIN {
        EdgeProximity::Bottom
    } else {
        EdgeProximity::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_columns_split_the_width_evenly() {
        // 320 wide: 2*4 inset + 2*4 spacing leaves 304 for three cells.
        let cell = cell_size(320.0, 3);
        assert!((cell - 304.0 / 3.0).abs() < 0.001);
    }

    #[test]
    fn thumbnail_size_scales_with_display() {
        assert_eq!(thumbnail_pixel_size(100.0, 1.0), 100);
        assert_eq!(thumbnail_pixel_size(100.0, 2.0), 200);
        // Scale below one never shrinks the request.
        assert_eq!(thumbnail_pixel_size(100.0, 0.5), 100);
    }

    #[test]
    fn index_round_trips_through_origin() {
        let cell = cell_size(320.0, 3);
        for index in [0usize, 1, 2, 3, 7, 11] {
            let (x, y) = cell_origin(index, 3, cell);
            let hit = index_at_point(x + cell / 2.0, y + cell / 2.0, 3, cell, 12);
            assert_eq!(hit, Some(index));
        }
    }

    #[test]
    fn points_beyond_the_content_miss() {
        let cell = cell_size(320.0, 3);
        assert_eq!(index_at_point(1.0, 1.0, 3, cell, 12), None);
        // Row below the last populated cell.
        let (_, y) = cell_origin(12, 3, cell);
        assert_eq!(index_at_point(GRID_INSET + 1.0, y + 1.0, 3, cell, 12), None);
    }

    #[test]
    fn visible_range_covers_the_viewport() {
        let cell = cell_size(320.0, 3);
        let range = visible_index_range(0.0, 2.0 * cell, 3, cell, 100);
        assert_eq!(range.start, 0);
        assert!(range.end >= 6, "at least two rows visible");

        let deep = visible_index_range(10.0 * (cell + GRID_SPACING), 2.0 * cell, 3, cell, 100);
        assert!(deep.start >= 27);
    }

    #[test]
    fn near_end_triggers_within_the_buffer() {
        let cell = 100.0;
        let content = grid_height(300, 3, cell);
        assert!(!near_end(0.0, 500.0, content, cell));
        assert!(near_end(content - 500.0, 500.0, content, cell));
        assert!(near_end(content - 500.0 - 2.0 * cell, 500.0, content, cell));
    }

    #[test]
    fn edge_margins_classify_pointer_position() {
        assert_eq!(edge_proximity(110.0, 100.0, 700.0), EdgeProximity::Top);
        assert_eq!(edge_proximity(400.0, 100.0, 700.0), EdgeProximity::None);
        assert_eq!(edge_proximity(690.0, 100.0, 700.0), EdgeProximity::Bottom);
    }
}
