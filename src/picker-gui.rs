//! Media Picker GUI Application
//!
//! An interactive photo and video picker built on the egui framework.
//! The picker features:
//! - A paged thumbnail grid with tap and drag-to-select gestures
//! - Ordered multi-selection with ordinal badges and a hard limit
//! - Album switching with stale-response protection
//! - A full-screen preview pager for reviewing the selection
//! - Asynchronous page and thumbnail loading off the GUI thread
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Core grid geometry (cell sizing, hit testing, edges)
//! - `io/` - Background page fetching and thumbnail decoding
//! - `rendering/` - Low-level cell drawing (badges, borders)
//! - `ui/` - Panel rendering and input handling
//! - `utils/` - Formatting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod app;
mod domain;
mod io;
mod rendering;
mod ui;
mod utils;

use app::settings_coordinator::CONFIG_STORAGE_KEY;
use app::{AppState, PickerCoordinator, SettingsCoordinator};
use io::{PageLoader, ThumbnailLoader};
use rpicker::{DynCatalog, FolderCatalog, PickerConfig, VirtualCatalog};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that initializes and launches the picker GUI.
fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 800.0])
            .with_title("Media Picker"),
        ..Default::default()
    };

    eframe::run_native(
        "Media Picker",
        options,
        Box::new(|cc| Ok(Box::new(PickerApp::new(cc)))),
    )
}

/// The main picker application.
///
/// Delegates most functionality to coordinators:
/// - `PickerCoordinator` handles the pick workflow and state transitions
/// - `SettingsCoordinator` persists the configuration
/// - `PanelManager` renders the screens and collects interactions
struct PickerApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous page fetcher
    pages: PageLoader,
    /// Thumbnail decode worker and texture cache, bound to the open catalog
    thumbnails: Option<ThumbnailLoader>,
}

impl PickerApp {
    /// Creates a new picker instance with configuration loaded from
    /// persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let config: PickerConfig = SettingsCoordinator::load_setting_or(
            cc.storage,
            CONFIG_STORAGE_KEY,
            PickerConfig::default(),
        );

        Self {
            state: AppState::new(config),
            pages: PageLoader::new(),
            thumbnails: None,
        }
    }

    /// Handles panel interactions by delegating to PickerCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::SampleCatalogRequested => {
                PickerCoordinator::set_catalog(
                    &mut self.state,
                    DynCatalog::Virtual(VirtualCatalog::new()),
                    "Sample library".to_owned(),
                    &mut self.thumbnails,
                );
            }
            PanelInteraction::FolderCatalogRequested(path) => {
                self.open_folder(path);
            }
            PanelInteraction::PickRequested => {
                PickerCoordinator::open_picker(
                    &mut self.state,
                    &mut self.pages,
                    &mut self.thumbnails,
                    ctx,
                );
            }
            PanelInteraction::AlbumChosen(album_id) => {
                PickerCoordinator::choose_album(
                    &mut self.state,
                    &mut self.pages,
                    &mut self.thumbnails,
                    album_id,
                    ctx,
                );
            }
            PanelInteraction::CellTapped(index) => {
                PickerCoordinator::cell_tapped(&mut self.state, index);
            }
            PanelInteraction::NearEndReached => {
                PickerCoordinator::near_end_reached(&mut self.state, &mut self.pages, ctx);
            }
            PanelInteraction::SelectionLimitHit => {
                PickerCoordinator::limit_hit(&mut self.state);
            }
            PanelInteraction::PreviewRequested => {
                PickerCoordinator::open_preview(&mut self.state);
            }
            PanelInteraction::PreviewDone => {
                PickerCoordinator::preview_done(&mut self.state);
            }
            PanelInteraction::PreviewDismissed => {
                PickerCoordinator::preview_dismissed(&mut self.state);
            }
            PanelInteraction::AddConfirmed => {
                PickerCoordinator::confirm(&mut self.state);
            }
            PanelInteraction::PickerCancelled => {
                PickerCoordinator::cancel(&mut self.state);
            }
            PanelInteraction::AlertDismissed => {
                PickerCoordinator::dismiss_alert(&mut self.state);
            }
        }
    }

    fn open_folder(&mut self, path: PathBuf) {
        match FolderCatalog::scan(&path) {
            Ok(catalog) => {
                let label = format!("Folder: {}", path.display());
                PickerCoordinator::set_catalog(
                    &mut self.state,
                    DynCatalog::Folder(catalog),
                    label,
                    &mut self.thumbnails,
                );
            }
            Err(error) => {
                self.state.error_message = Some(format!("Failed to open folder: {}", error));
            }
        }
    }
}

impl eframe::App for PickerApp {
    /// Called when the app is being shut down - ensures the configuration
    /// is saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_setting(storage, CONFIG_STORAGE_KEY, &self.state.config);
    }

    /// Main update loop that renders the current screen and drives the
    /// background loaders.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply completed page fetches before rendering
        PickerCoordinator::check_page_completion(&mut self.state, &mut self.pages);

        // Render the current screen and handle its interactions
        let interactions = PanelManager::render_all_panels(ctx, &mut self.state, &mut self.thumbnails);
        for interaction in interactions {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
