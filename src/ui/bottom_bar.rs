//! Picker bottom bar: selection summary, preview and add buttons.

use crate::app::AppState;
use crate::utils::formatting::selection_count_label;
use eframe::egui;

/// Interactions produced by the bottom bar.
pub enum BottomBarInteraction {
    /// Review the current selection full-screen
    PreviewRequested,
    /// Confirm the pick and hand the assets back
    AddConfirmed,
}

/// Renders the picker's bottom bar.
pub fn render_bottom_bar(ui: &mut egui::Ui, state: &AppState) -> Option<BottomBarInteraction> {
    let mut interaction = None;
    let has_selection = !state.selection.is_empty();

    ui.horizontal(|ui| {
        // The summary label stays hidden until something is selected.
        if has_selection {
            ui.label(selection_count_label(state.selection.count()));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(has_selection, egui::Button::new("Add"))
                .clicked()
            {
                interaction = Some(BottomBarInteraction::AddConfirmed);
            }
            if ui
                .add_enabled(has_selection, egui::Button::new("Preview"))
                .clicked()
            {
                interaction = Some(BottomBarInteraction::PreviewRequested);
            }
        });
    });

    interaction
}
