//! Core data model and the asset catalog contract.
//!
//! The picker never owns media content. It consumes albums, paged asset
//! lists and thumbnails through the [`AssetCatalog`] trait and holds only
//! identifiers in its own state. Concrete catalogs are dispatched through
//! the [`DynCatalog`] enum so loader threads can share one `Arc<DynCatalog>`
//! without trait objects.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Type alias for asset identifiers (stable within one catalog instance)
pub type AssetId = u64;

/// Type alias for album identifiers
pub type AlbumId = u64;

/// Kind of media an asset holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Where an asset's content lives.
///
/// Folder catalogs point at a file on disk; virtual catalogs carry a
/// generator seed so thumbnails are reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOrigin {
    Path(PathBuf),
    Synthetic(u64),
}

/// A single photo or video from the library.
///
/// Assets are immutable snapshots; the picker state machines reference
/// them by [`AssetId`] only.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub id: AssetId,
    pub kind: MediaKind,
    /// Playback length in seconds. Zero for images and for videos whose
    /// container could not be probed.
    pub duration_secs: f64,
    pub created_at: DateTime<Utc>,
    /// True when the original content is cloud-resident and a fetch may
    /// require network access.
    pub is_cloud: bool,
    pub origin: AssetOrigin,
}

impl Asset {
    /// Returns true when a duration badge should be shown for this asset.
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// A named collection of assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    /// Restricts membership to one media kind; `None` admits both.
    pub kind_filter: Option<MediaKind>,
}

/// Outcome of a library authorization request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Granted,
    Limited,
    Denied,
}

impl Authorization {
    /// Returns true when asset fetching may proceed.
    pub fn allows_access(&self) -> bool {
        matches!(self, Authorization::Granted | Authorization::Limited)
    }
}

/// Decoded RGBA thumbnail payload, independent of any GUI toolkit.
///
/// `rgba` holds `width * height * 4` bytes in row-major order. The GUI
/// layer converts this into a texture once, on the presentation thread.
#[derive(Debug, Clone)]
pub struct ThumbnailPixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Errors surfaced by catalog implementations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("album {0} not found")]
    AlbumNotFound(AlbumId),

    #[error("asset {0} not found")]
    AssetNotFound(AssetId),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Contract the picker depends on for albums, assets and thumbnails.
///
/// All fetch methods are blocking; callers that need responsiveness run
/// them on a background thread and marshal results back to the
/// presentation thread (see the GUI's loader modules).
///
/// `fetch_assets` must return assets sorted by creation date descending
/// and truncated to `limit`. Re-querying with a larger limit must return
/// the previous result as a prefix as long as the underlying library did
/// not change; the pagination controller relies on this to append only
/// the new tail.
pub trait AssetCatalog {
    /// Requests (or re-checks) permission to read the library.
    fn request_authorization(&self) -> Authorization;

    /// Returns all albums in presentation order.
    fn list_albums(&self) -> Vec<Album>;

    /// Returns the number of assets an album holds.
    fn count_assets(&self, album: AlbumId) -> usize;

    /// Fetches up to `limit` assets of an album, newest first.
    fn fetch_assets(&self, album: AlbumId, limit: usize) -> Result<Vec<Asset>, CatalogError>;

    /// Resolves a single asset by identifier.
    fn get_asset(&self, id: AssetId) -> Option<Asset>;

    /// Loads a square thumbnail of roughly `target_px` pixels per side.
    fn load_thumbnail(&self, id: AssetId, target_px: u32) -> Result<ThumbnailPixels, CatalogError>;
}

/// Enum dispatch over the available catalog implementations.
pub enum DynCatalog {
    Virtual(crate::virtual_catalog::VirtualCatalog),
    Folder(crate::folder_catalog::FolderCatalog),
}

impl AssetCatalog for DynCatalog {
    fn request_authorization(&self) -> Authorization {
        match self {
            DynCatalog::Virtual(c) => c.request_authorization(),
            DynCatalog::Folder(c) => c.request_authorization(),
        }
    }

    fn list_albums(&self) -> Vec<Album> {
        match self {
            DynCatalog::Virtual(c) => c.list_albums(),
            DynCatalog::Folder(c) => c.list_albums(),
        }
    }

    fn count_assets(&self, album: AlbumId) -> usize {
        match self {
            DynCatalog::Virtual(c) => c.count_assets(album),
            DynCatalog::Folder(c) => c.count_assets(album),
        }
    }

    fn fetch_assets(&self, album: AlbumId, limit: usize) -> Result<Vec<Asset>, CatalogError> {
        match self {
            DynCatalog::Virtual(c) => c.fetch_assets(album, limit),
            DynCatalog::Folder(c) => c.fetch_assets(album, limit),
        }
    }

    fn get_asset(&self, id: AssetId) -> Option<Asset> {
        match self {
            DynCatalog::Virtual(c) => c.get_asset(id),
            DynCatalog::Folder(c) => c.get_asset(id),
        }
    }

    fn load_thumbnail(&self, id: AssetId, target_px: u32) -> Result<ThumbnailPixels, CatalogError> {
        match self {
            DynCatalog::Virtual(c) => c.load_thumbnail(id, target_px),
            DynCatalog::Folder(c) => c.load_thumbnail(id, target_px),
        }
    }
}
