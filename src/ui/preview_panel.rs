//! Full-screen preview pager over the current selection.
//!
//! The pager works on the snapshot held in `AppState::preview`. Page
//! navigation and the select toggle mutate the snapshot directly; only
//! Done and Back leave the screen, and only Done commits the edits.

use crate::app::AppState;
use crate::io::ThumbnailLoader;
use crate::utils::formatting::{format_duration, selection_count_label};
use eframe::egui;
use egui::RichText;

/// Interactions produced by the preview panel.
pub enum PreviewInteraction {
    /// Commit the edits and return to the grid
    Done,
    /// Discard the edits and return to the grid
    Dismissed,
}

/// Renders the preview screen.
pub fn render_preview_panel(
    ui: &mut egui::Ui,
    state: &mut AppState,
    thumbnails: &Option<ThumbnailLoader>,
) -> Option<PreviewInteraction> {
    let mut interaction = None;

    let Some(preview) = state.preview.as_mut() else {
        // Nothing to show; bail back to the grid.
        return Some(PreviewInteraction::Dismissed);
    };

    ui.horizontal(|ui| {
        if ui.button("Back").clicked() {
            interaction = Some(PreviewInteraction::Dismissed);
        }
        ui.label(format!(
            "{} of {}",
            preview.current_index() + 1,
            preview.len()
        ));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Done").clicked() {
                interaction = Some(PreviewInteraction::Done);
            }
            ui.label(selection_count_label(preview.selected_count()));
        });
    });
    ui.separator();

    let current = preview.current_item().cloned();
    if let Some(item) = &current {
        let available = ui.available_height() - 40.0;
        ui.allocate_ui(egui::Vec2::new(ui.available_width(), available.max(0.0)), |ui| {
            ui.centered_and_justified(|ui| {
                match thumbnails.as_ref().and_then(|t| t.texture(item.asset_id)) {
                    Some(texture) => {
                        ui.add(
                            egui::Image::new(texture)
                                .maintain_aspect_ratio(true)
                                .shrink_to_fit(),
                        );
                    }
                    None => {
                        ui.spinner();
                    }
                }
            });
        });

        ui.horizontal(|ui| {
            let index = preview.current_index();
            if ui.add_enabled(index > 0, egui::Button::new("◀")).clicked() {
                preview.set_current(index.saturating_sub(1));
            }
            if ui
                .add_enabled(index + 1 < preview.len(), egui::Button::new("▶"))
                .clicked()
            {
                preview.set_current(index + 1);
            }

            let toggle_text = if item.selected { "Deselect" } else { "Select" };
            if ui.button(toggle_text).clicked() {
                preview.toggle_current();
            }

            if let Some(asset) = state.assets.get(&item.asset_id) {
                if asset.is_video() {
                    ui.label(
                        RichText::new(format_duration(asset.duration_secs)).monospace(),
                    );
                }
            }
        });
    }

    interaction
}
