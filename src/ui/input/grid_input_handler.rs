//! Pointer input for the media grid: tap selection and drag-select.
//!
//! Taps toggle a single cell. Drags run the drag-select session:
//! pointer velocity decides per event whether the motion means
//! selection or scrolling, and proximity to the viewport edges engages
//! auto-scroll so a sweep can continue past the visible rows.

use crate::app::AppState;
use crate::domain::grid_operations;
use eframe::egui;
use rpicker::GestureDecision;

/// Result of grid input handling for one frame.
#[derive(Default)]
pub struct GridInputResult {
    /// Cell index of a completed tap
    pub tapped: Option<usize>,
    /// True when a drag ran into the selection limit this frame
    pub limit_hit: bool,
}

/// Handles tap and drag input over the grid.
///
/// # Arguments
/// * `ctx` - egui context for raw pointer state
/// * `grid_rect` - Full content rectangle of the grid
/// * `viewport` - Visible part of the scroll area
/// * `response` - Interaction response of the grid allocation
/// * `state` - Application state (drag session and selection)
/// * `cell_size` - Side length of one cell
pub fn handle_grid_input(
    ctx: &egui::Context,
    grid_rect: egui::Rect,
    viewport: egui::Rect,
    response: &egui::Response,
    state: &mut AppState,
    cell_size: f32,
) -> GridInputResult {
    let mut result = GridInputResult::default();
    let columns = state.config.items_per_row;
    let count = state.pages.len();

    let index_under = |pos: egui::Pos2| {
        grid_operations::index_at_point(
            pos.x - grid_rect.left(),
            pos.y - grid_rect.top(),
            columns,
            cell_size,
            count,
        )
    };

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            result.tapped = index_under(pos);
        }
    }

    if response.drag_started() {
        let anchor = ctx
            .input(|i| i.pointer.press_origin())
            .and_then(index_under);
        state.drag.begin(anchor);
    }

    if response.dragged() {
        let (pointer_pos, velocity) =
            ctx.input(|i| (i.pointer.interact_pos(), i.pointer.velocity()));
        if let Some(pos) = pointer_pos {
            let decision = GestureDecision::from_velocity(velocity.x, velocity.y);
            let edge = grid_operations::edge_proximity(pos.y, viewport.top(), viewport.bottom());
            let current = index_under(pos);

            // Split borrows: the drag session walks the loaded ids and
            // mutates the selection store.
            let AppState {
                ref pages,
                ref mut selection,
                ref mut drag,
                ..
            } = *state;
            let update = drag.update(current, decision, edge, pages.loaded_ids(), selection);
            if update.limit_hit {
                result.limit_hit = true;
            }
        }
    }

    // Release and cancel both terminate the session.
    if response.drag_stopped() || (state.drag.is_active() && !ctx.input(|i| i.pointer.any_down())) {
        state.drag.end();
    }

    result
}
