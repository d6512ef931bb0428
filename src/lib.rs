pub mod traits;
pub mod selection;
pub mod pagination;
pub mod drag_select;
pub mod preview;
pub mod config;
pub mod virtual_catalog;
pub mod folder_catalog;

// Export the catalog contract and data model
pub use traits::{
    Album, AlbumId, Asset, AssetCatalog, AssetId, AssetOrigin, Authorization,
    CatalogError, DynCatalog, MediaKind, ThumbnailPixels,
};

// Export the picker state machines
pub use selection::{SelectionChange, SelectionError, SelectionStore, DEFAULT_SELECTION_LIMIT};
pub use pagination::{FetchPhase, PageRequest, PageState, DEFAULT_PAGE_BATCH_SIZE};
pub use drag_select::{
    AutoScroll, DragSelectState, DragUpdate, EdgeProximity, GestureDecision,
};
pub use preview::{PreviewItem, PreviewState};

// Export configuration
pub use config::{PickerConfig, DEFAULT_ITEMS_PER_ROW};

// Export catalog implementations
pub use folder_catalog::FolderCatalog;
pub use virtual_catalog::VirtualCatalog;
