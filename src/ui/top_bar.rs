//! Picker top bar: album switcher and cancel.

use crate::app::AppState;
use eframe::egui;
use rpicker::{AlbumId, AssetCatalog};

/// Interactions produced by the top bar.
pub enum TopBarInteraction {
    /// A different album was picked from the switcher
    AlbumChosen(AlbumId),
    /// The pick session was abandoned
    Cancelled,
}

/// Renders the picker's top bar.
pub fn render_top_bar(ui: &mut egui::Ui, state: &AppState) -> Option<TopBarInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let current_title = state
            .current_album
            .and_then(|id| state.albums.iter().find(|album| album.id == id))
            .map(|album| album.title.as_str())
            .unwrap_or("Albums");

        egui::ComboBox::from_id_salt("album_switcher")
            .selected_text(current_title)
            .show_ui(ui, |ui| {
                for album in &state.albums {
                    let selected = state.current_album == Some(album.id);
                    let entry = match &state.catalog {
                        Some(catalog) => {
                            format!("{} ({})", album.title, catalog.count_assets(album.id))
                        }
                        None => album.title.clone(),
                    };
                    if ui.selectable_label(selected, entry).clicked() && !selected {
                        interaction = Some(TopBarInteraction::AlbumChosen(album.id));
                    }
                }
            });

        if state.pages.is_loading() {
            ui.spinner();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Cancel").clicked() {
                interaction = Some(TopBarInteraction::Cancelled);
            }
        });
    });

    interaction
}
