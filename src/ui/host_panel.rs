//! Host screen: choose a media source, start a pick, show the results.

use crate::app::AppState;
use crate::utils::formatting::format_duration;
use eframe::egui;
use egui::RichText;
use rpicker::MediaKind;
use std::path::PathBuf;

/// Interactions produced by the host panel.
pub enum HostInteraction {
    /// Open the built-in sample library
    SampleCatalogRequested,
    /// Open a folder on disk as the media source
    FolderCatalogRequested(PathBuf),
    /// Start a pick session over the active source
    PickRequested,
}

/// Renders the host screen.
pub fn render_host_panel(ui: &mut egui::Ui, state: &AppState) -> Option<HostInteraction> {
    let mut interaction = None;

    ui.heading("Media Picker");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.button("Sample Library").clicked() {
            interaction = Some(HostInteraction::SampleCatalogRequested);
        }
        if ui.button("Open Folder…").clicked() {
            if let Some(folder) = rfd::FileDialog::new()
                .set_title("Choose a media folder")
                .pick_folder()
            {
                interaction = Some(HostInteraction::FolderCatalogRequested(folder));
            }
        }
    });

    match &state.source_label {
        Some(label) => {
            ui.label(format!("Source: {}", label));
        }
        None => {
            ui.label(RichText::new("No media source selected").weak());
        }
    }

    if let Some(error) = &state.error_message {
        ui.colored_label(egui::Color32::LIGHT_RED, error);
    }

    ui.add_space(8.0);
    let pick_enabled = state.catalog.is_some();
    if ui
        .add_enabled(pick_enabled, egui::Button::new("Pick Media"))
        .clicked()
    {
        interaction = Some(HostInteraction::PickRequested);
    }

    ui.separator();
    ui.heading("Last Pick");
    if state.confirmed.is_empty() {
        ui.label(RichText::new("No items picked yet").weak());
    } else {
        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for (position, asset) in state.confirmed.iter().enumerate() {
                    let description = match asset.kind {
                        MediaKind::Image => format!("{}. Photo", position + 1),
                        MediaKind::Video => format!(
                            "{}. Video ({})",
                            position + 1,
                            format_duration(asset.duration_secs)
                        ),
                    };
                    let suffix = if asset.is_cloud { "  ☁" } else { "" };
                    ui.label(format!(
                        "{}  {}{}",
                        description,
                        asset.created_at.format("%Y-%m-%d %H:%M"),
                        suffix
                    ));
                }
            });
    }

    interaction
}
