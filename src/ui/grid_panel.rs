//! The scrollable thumbnail grid.
//!
//! Only the rows intersecting the viewport are painted and only their
//! thumbnails are requested. Textures are looked up by asset id, so a
//! cell whose index now shows a different asset (after an album switch)
//! can never display a stale image.

use crate::app::AppState;
use crate::domain::grid_operations;
use crate::io::ThumbnailLoader;
use crate::rendering::cell_renderer::{self, CellVisuals};
use crate::ui::input::grid_input_handler;
use eframe::egui;
use egui::{Rect, Vec2};
use rpicker::AutoScroll;

/// Interactions produced by the grid panel.
pub enum GridInteraction {
    /// A cell was tapped
    CellTapped(usize),
    /// Scrolling approached the end of the loaded content
    NearEndReached,
    /// A drag gesture ran into the selection limit
    SelectionLimitHit,
}

/// Renders the media grid inside a vertical scroll area.
pub fn render_grid_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
    thumbnails: &mut Option<ThumbnailLoader>,
) -> Vec<GridInteraction> {
    let mut interactions = Vec::new();
    let count = state.pages.len();
    let columns = state.config.items_per_row;

    if count == 0 {
        ui.centered_and_justified(|ui| {
            if state.pages.is_loading() {
                ui.spinner();
            } else {
                ui.label("No media in this album");
            }
        });
        return interactions;
    }

    if let Some(thumbnails) = thumbnails.as_mut() {
        thumbnails.drain_results(ctx);
    }

    let metrics = egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .id_salt("media_grid")
        .show(ui, |ui| {
            let width = ui.available_width();
            let cell = grid_operations::cell_size(width, columns);
            let height = grid_operations::grid_height(count, columns, cell);
            let (grid_rect, response) =
                ui.allocate_exact_size(Vec2::new(width, height), egui::Sense::click_and_drag());

            let viewport = ui.clip_rect();
            let scroll_offset = (viewport.top() - grid_rect.top()).max(0.0);
            let visible = grid_operations::visible_index_range(
                scroll_offset,
                viewport.height(),
                columns,
                cell,
                count,
            );

            // Queue thumbnail decodes for the visible cells only.
            if let Some(thumbnails) = thumbnails.as_mut() {
                let target_px = grid_operations::thumbnail_pixel_size(cell, ctx.pixels_per_point());
                for index in visible.clone() {
                    if let Some(id) = state.pages.id_at(index) {
                        thumbnails.request(id, target_px);
                    }
                }
            }

            let painter = ui.painter_at(viewport);
            for index in visible {
                let Some(id) = state.pages.id_at(index) else {
                    continue;
                };
                let (x, y) = grid_operations::cell_origin(index, columns, cell);
                let cell_rect = Rect::from_min_size(
                    grid_rect.min + Vec2::new(x, y),
                    Vec2::splat(cell),
                );
                let visuals = CellVisuals {
                    rect: cell_rect,
                    texture: thumbnails.as_ref().and_then(|t| t.texture(id)),
                    failed: thumbnails.as_ref().is_some_and(|t| t.has_failed(id)),
                    asset: state.asset(id),
                    ordinal: state.selection.ordinal(id),
                };
                cell_renderer::paint_cell(&painter, &visuals);
            }

            let input =
                grid_input_handler::handle_grid_input(ctx, grid_rect, viewport, &response, state, cell);
            if let Some(index) = input.tapped {
                interactions.push(GridInteraction::CellTapped(index));
            }
            if input.limit_hit {
                interactions.push(GridInteraction::SelectionLimitHit);
            }

            // Edge auto-scroll advances a little every frame while the
            // drag holds the pointer near an edge.
            if let Some(direction) = state.drag.auto_scroll() {
                let dt = ctx.input(|i| i.stable_dt).min(0.1);
                let step = grid_operations::AUTO_SCROLL_VELOCITY * dt;
                let dy = match direction {
                    AutoScroll::Up => step,
                    AutoScroll::Down => -step,
                };
                ui.scroll_with_delta(Vec2::new(0.0, dy));
                ctx.request_repaint();
            }

            (scroll_offset, viewport.height(), height, cell)
        })
        .inner;

    let (scroll_offset, viewport_height, content_height, cell) = metrics;
    if grid_operations::near_end(scroll_offset, viewport_height, content_height, cell) {
        interactions.push(GridInteraction::NearEndReached);
    }

    interactions
}
