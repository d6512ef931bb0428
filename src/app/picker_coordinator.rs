//! Picker workflow coordination.
//!
//! Handles the high-level operations of a pick session: opening the
//! picker, switching albums, applying fetched pages, tap and drag
//! selection, preview, confirm and cancel. The UI panels report
//! interactions; this coordinator turns them into state transitions.

use crate::app::{AppState, Screen};
use crate::io::{PageLoader, PageResult, ThumbnailLoader};
use eframe::egui;
use rpicker::{AssetCatalog, DynCatalog, SelectionChange, SelectionError};
use std::sync::Arc;

/// Coordinates picker-level operations and workflows.
///
/// This struct is responsible for:
/// - Opening catalogs and requesting authorization
/// - Driving the pagination state machine through the page loader
/// - Applying tap selection and surfacing the limit alert
/// - Preview commit/dismiss and the final confirm handoff
pub struct PickerCoordinator;

impl PickerCoordinator {
    /// Installs a catalog as the active media source.
    ///
    /// Replaces the thumbnail loader, since its worker thread is bound
    /// to one catalog instance.
    pub fn set_catalog(
        state: &mut AppState,
        catalog: DynCatalog,
        label: String,
        thumbnails: &mut Option<ThumbnailLoader>,
    ) {
        let catalog = Arc::new(catalog);
        *thumbnails = Some(ThumbnailLoader::new(Arc::clone(&catalog)));
        state.catalog = Some(catalog);
        state.source_label = Some(label);
        state.authorization = None;
        state.albums.clear();
        state.error_message = None;
        state.reset_pick_session();
    }

    /// Opens the picker screen over the active catalog.
    ///
    /// Requests authorization first; a denied library keeps the user on
    /// the host screen with an error message. Otherwise the album list
    /// is loaded and the first album opens.
    pub fn open_picker(
        state: &mut AppState,
        pages: &mut PageLoader,
        thumbnails: &mut Option<ThumbnailLoader>,
        ctx: &egui::Context,
    ) {
        let Some(catalog) = state.catalog.clone() else {
            state.error_message = Some("No media source selected".to_owned());
            return;
        };

        let authorization = catalog.request_authorization();
        state.authorization = Some(authorization);
        if !authorization.allows_access() {
            state.error_message = Some("Access to the media library was denied".to_owned());
            return;
        }

        state.reset_pick_session();
        state.albums = catalog.list_albums();
        state.error_message = None;
        state.screen = Screen::Picker;

        if let Some(first) = state.albums.first().map(|album| album.id) {
            Self::choose_album(state, pages, thumbnails, first, ctx);
        }
    }

    /// Switches the grid to another album and fetches its first page.
    pub fn choose_album(
        state: &mut AppState,
        pages: &mut PageLoader,
        thumbnails: &mut Option<ThumbnailLoader>,
        album_id: rpicker::AlbumId,
        ctx: &egui::Context,
    ) {
        let Some(catalog) = state.catalog.clone() else {
            return;
        };
        // The selection survives album switches; only the grid reloads.
        state.current_album = Some(album_id);
        state.drag.end();
        if let Some(thumbnails) = thumbnails {
            thumbnails.reset();
        }
        let request = state.pages.open_album(album_id);
        pages.start_fetch(catalog, request, ctx);
    }

    /// Checks for page fetch completion and applies results.
    ///
    /// Called once per frame in the update loop. Returns true if a fetch
    /// completed (success or error).
    pub fn check_page_completion(state: &mut AppState, pages: &mut PageLoader) -> bool {
        match pages.check_completion() {
            PageResult::Success { generation, assets } => {
                state.remember_assets(&assets);
                state.pages.apply(generation, &assets);
                true
            }
            PageResult::Error { generation, message } => {
                state.pages.fetch_failed(generation);
                state.error_message = Some(format!("Failed to load assets: {}", message));
                true
            }
            PageResult::None => false,
        }
    }

    /// Requests the next page once scrolling nears the end of the grid.
    pub fn near_end_reached(state: &mut AppState, pages: &mut PageLoader, ctx: &egui::Context) {
        let Some(catalog) = state.catalog.clone() else {
            return;
        };
        if let Some(request) = state.pages.near_end() {
            pages.start_fetch(catalog, request, ctx);
        }
    }

    /// Toggles the asset in the tapped cell.
    ///
    /// Adding past the limit leaves the selection unchanged and raises
    /// the limit alert.
    pub fn cell_tapped(state: &mut AppState, index: usize) {
        let Some(id) = state.pages.id_at(index) else {
            return;
        };
        match state.selection.toggle(id) {
            Ok(SelectionChange::Added { .. }) | Ok(SelectionChange::Removed { .. }) => {}
            Err(SelectionError::LimitExceeded { limit }) => {
                state.alert = Some(format!("You can select up to {} items", limit));
            }
        }
    }

    /// Raises the limit alert on behalf of a drag gesture.
    pub fn limit_hit(state: &mut AppState) {
        state.alert = Some(format!(
            "You can select up to {} items",
            state.selection.limit()
        ));
    }

    // ===== Preview =====

    /// Opens the preview pager over the current selection.
    pub fn open_preview(state: &mut AppState) {
        if state.selection.is_empty() {
            return;
        }
        state.drag.end();
        state.preview = Some(rpicker::PreviewState::from_selection(&state.selection));
        state.screen = Screen::Preview;
    }

    /// Commits preview edits back into the selection and returns to the
    /// grid.
    pub fn preview_done(state: &mut AppState) {
        if let Some(preview) = state.preview.take() {
            preview.commit(&mut state.selection);
        }
        state.screen = Screen::Picker;
    }

    /// Leaves the preview without applying its edits.
    pub fn preview_dismissed(state: &mut AppState) {
        state.preview = None;
        state.screen = Screen::Picker;
    }

    // ===== Confirm / Cancel =====

    /// Confirms the pick: resolves the ordered selection into assets,
    /// hands them to the host screen and ends the session.
    pub fn confirm(state: &mut AppState) {
        let ordered = state.selection.ordered_ids().to_vec();
        let mut confirmed = Vec::with_capacity(ordered.len());
        for id in ordered {
            if let Some(asset) = state.asset(id) {
                confirmed.push(asset.clone());
            } else if let Some(catalog) = &state.catalog {
                if let Some(asset) = catalog.get_asset(id) {
                    confirmed.push(asset);
                }
            }
        }
        state.confirmed = confirmed;
        state.reset_pick_session();
        state.screen = Screen::Host;
    }

    /// Abandons the pick without results.
    pub fn cancel(state: &mut AppState) {
        state.reset_pick_session();
        state.screen = Screen::Host;
    }

    /// Dismisses the current modal alert.
    pub fn dismiss_alert(state: &mut AppState) {
        state.alert = None;
    }
}
