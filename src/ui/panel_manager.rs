//! Screen orchestration and layout management.
//!
//! Renders the panel arrangement of the current screen and funnels all
//! panel interactions into one enum the application coordinator handles.

use crate::app::{AppState, Screen};
use crate::io::ThumbnailLoader;
use crate::ui::{bottom_bar, grid_panel, host_panel, preview_panel, top_bar};
use eframe::egui;
use std::path::PathBuf;

/// Result of panel interactions that need to be handled by the picker
/// coordinator.
pub enum PanelInteraction {
    /// User chose the built-in sample library as the source
    SampleCatalogRequested,
    /// User chose a folder on disk as the source
    FolderCatalogRequested(PathBuf),
    /// User pressed the pick button on the host screen
    PickRequested,
    /// A different album was picked from the switcher
    AlbumChosen(rpicker::AlbumId),
    /// A grid cell was tapped
    CellTapped(usize),
    /// Scrolling approached the end of the loaded content
    NearEndReached,
    /// A drag gesture ran into the selection limit
    SelectionLimitHit,
    /// Review the current selection full-screen
    PreviewRequested,
    /// Commit preview edits and return to the grid
    PreviewDone,
    /// Discard preview edits and return to the grid
    PreviewDismissed,
    /// Confirm the pick and hand the assets back
    AddConfirmed,
    /// Abandon the pick session
    PickerCancelled,
    /// Dismiss the modal alert
    AlertDismissed,
}

/// Manages the layout and rendering of all screens.
pub struct PanelManager;

impl PanelManager {
    /// Renders the current screen.
    ///
    /// This is the main entry point for rendering the entire UI, called
    /// from the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        thumbnails: &mut Option<ThumbnailLoader>,
    ) -> Vec<PanelInteraction> {
        let mut interactions = Vec::new();

        match state.screen {
            Screen::Host => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    if let Some(host) = host_panel::render_host_panel(ui, state) {
                        interactions.push(match host {
                            host_panel::HostInteraction::SampleCatalogRequested => {
                                PanelInteraction::SampleCatalogRequested
                            }
                            host_panel::HostInteraction::FolderCatalogRequested(path) => {
                                PanelInteraction::FolderCatalogRequested(path)
                            }
                            host_panel::HostInteraction::PickRequested => {
                                PanelInteraction::PickRequested
                            }
                        });
                    }
                });
            }
            Screen::Picker => {
                egui::TopBottomPanel::top("picker_top").show(ctx, |ui| {
                    if let Some(top) = top_bar::render_top_bar(ui, state) {
                        interactions.push(match top {
                            top_bar::TopBarInteraction::AlbumChosen(id) => {
                                PanelInteraction::AlbumChosen(id)
                            }
                            top_bar::TopBarInteraction::Cancelled => {
                                PanelInteraction::PickerCancelled
                            }
                        });
                    }
                });

                egui::TopBottomPanel::bottom("picker_bottom").show(ctx, |ui| {
                    if let Some(bottom) = bottom_bar::render_bottom_bar(ui, state) {
                        interactions.push(match bottom {
                            bottom_bar::BottomBarInteraction::PreviewRequested => {
                                PanelInteraction::PreviewRequested
                            }
                            bottom_bar::BottomBarInteraction::AddConfirmed => {
                                PanelInteraction::AddConfirmed
                            }
                        });
                    }
                });

                egui::CentralPanel::default()
                    .frame(egui::Frame::default().fill(ctx.style().visuals.panel_fill))
                    .show(ctx, |ui| {
                        for grid in grid_panel::render_grid_panel(ui, ctx, state, thumbnails) {
                            interactions.push(match grid {
                                grid_panel::GridInteraction::CellTapped(index) => {
                                    PanelInteraction::CellTapped(index)
                                }
                                grid_panel::GridInteraction::NearEndReached => {
                                    PanelInteraction::NearEndReached
                                }
                                grid_panel::GridInteraction::SelectionLimitHit => {
                                    PanelInteraction::SelectionLimitHit
                                }
                            });
                        }
                    });
            }
            Screen::Preview => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    if let Some(preview) = preview_panel::render_preview_panel(ui, state, thumbnails)
                    {
                        interactions.push(match preview {
                            preview_panel::PreviewInteraction::Done => {
                                PanelInteraction::PreviewDone
                            }
                            preview_panel::PreviewInteraction::Dismissed => {
                                PanelInteraction::PreviewDismissed
                            }
                        });
                    }
                });
            }
        }

        // Modal alert over whatever screen is up
        if let Some(alert) = state.alert.clone() {
            egui::Window::new("Notice")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(alert);
                    ui.vertical_centered(|ui| {
                        if ui.button("OK").clicked() {
                            interactions.push(PanelInteraction::AlertDismissed);
                        }
                    });
                });
        }

        interactions
    }
}
