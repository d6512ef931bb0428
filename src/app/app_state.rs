//! Centralized application state for the picker GUI.
//!
//! State is composed of the focused library state machines (selection,
//! pagination, drag, preview) plus the top-level navigation and catalog
//! fields. Each component keeps its invariants local; the coordinator
//! mutates them through their intent-revealing methods.

use rpicker::{
    Album, AlbumId, Asset, AssetId, Authorization, DragSelectState, DynCatalog, PageState,
    PickerConfig, PreviewState, SelectionStore,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Which screen the window currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Hosting screen: source choice, pick button, confirmed results.
    Host,
    /// The media grid with album switcher and selection bar.
    Picker,
    /// Full-screen pager over the current selection.
    Preview,
}

/// Main application state composed of focused state components.
pub struct AppState {
    /// Active configuration (selection limit, batch size, columns)
    pub config: PickerConfig,

    /// Current screen
    pub screen: Screen,

    // ===== Catalog =====
    /// The opened media source; shared with the loader threads
    pub catalog: Option<Arc<DynCatalog>>,

    /// Human-readable description of the open source
    pub source_label: Option<String>,

    /// Last authorization result from the catalog
    pub authorization: Option<Authorization>,

    /// Albums of the open catalog, in presentation order
    pub albums: Vec<Album>,

    /// Album currently shown in the grid
    pub current_album: Option<AlbumId>,

    // ===== Picker Session =====
    /// Ordered multi-selection with ordinal badges
    pub selection: SelectionStore,

    /// Paged loading state for the current album
    pub pages: PageState,

    /// In-progress drag-select gesture
    pub drag: DragSelectState,

    /// Preview pager state while the preview screen is up
    pub preview: Option<PreviewState>,

    /// Metadata of every asset seen this session, for badges and confirm
    pub assets: HashMap<AssetId, Asset>,

    // ===== Results and Messages =====
    /// Assets handed back by the last confirmed pick, in selection order
    pub confirmed: Vec<Asset>,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Modal alert text, e.g. the selection limit notice
    pub alert: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}

impl AppState {
    /// Creates application state for the given configuration.
    pub fn new(config: PickerConfig) -> Self {
        let config = config.sanitized();
        Self {
            config,
            screen: Screen::Host,
            catalog: None,
            source_label: None,
            authorization: None,
            albums: Vec::new(),
            current_album: None,
            selection: SelectionStore::new(config.max_selection_limit),
            pages: PageState::new(config.page_batch_size),
            drag: DragSelectState::new(),
            preview: None,
            assets: HashMap::new(),
            confirmed: Vec::new(),
            error_message: None,
            alert: None,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Clears all per-pick state. Called when the picker opens and after
    /// confirm or cancel, so every pick starts from an empty selection.
    pub fn reset_pick_session(&mut self) {
        self.selection = SelectionStore::new(self.config.max_selection_limit);
        self.pages = PageState::new(self.config.page_batch_size);
        self.drag = DragSelectState::new();
        self.preview = None;
        self.current_album = None;
        self.assets.clear();
        self.alert = None;
    }

    /// Records fetched asset metadata for badge rendering and confirm.
    pub fn remember_assets(&mut self, assets: &[Asset]) {
        for asset in assets {
            self.assets.insert(asset.id, asset.clone());
        }
    }

    /// Looks up a previously fetched asset by id.
    pub fn asset(&self, id: AssetId) -> Option<&Asset> {
        self.assets.get(&id)
    }
}
