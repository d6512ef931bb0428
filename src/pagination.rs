//! Batched asset fetching for one album session.
//!
//! Pages are fetched by re-querying the catalog with an increasing limit
//! instead of a cursor: request `loaded + batch`, then append only the
//! tail beyond what is already loaded. This tolerates concurrent library
//! mutations (the catalog re-sorts consistently by creation date) at the
//! cost of some duplicate fetch work; if the library changes between
//! pages, items may visibly shift, which is accepted behavior.
//!
//! The state machine serializes fetches: while a request is in flight no
//! further near-end trigger produces a request, and responses from a
//! previously opened album are identified by generation and discarded.

use std::ops::Range;

use crate::traits::{AlbumId, Asset, AssetId};

/// Default number of assets fetched per page.
pub const DEFAULT_PAGE_BATCH_SIZE: usize = 100;

/// Fetch phase of the current album session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// No album opened yet.
    Idle,
    /// A page request is in flight.
    Loading,
    /// Loaded and quiescent; near-end triggers may request more.
    Loaded,
}

/// A page request handed to the catalog loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub album_id: AlbumId,
    /// Album-session token; responses carrying a stale generation are
    /// dropped by [`PageState::apply`].
    pub generation: u64,
    /// Total number of assets to query (not just the new page).
    pub limit: usize,
}

/// Paged loading state for the currently open album.
///
/// Responsibilities:
/// - Tracking the loaded identifier list (append-only per session)
/// - Serializing page fetches through the `Loading` guard
/// - Detecting exhaustion of the album
/// - Discarding stale responses after an album switch
#[derive(Debug, Clone)]
pub struct PageState {
    album_id: Option<AlbumId>,
    generation: u64,
    loaded: Vec<AssetId>,
    batch_size: usize,
    phase: FetchPhase,
    exhausted: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_BATCH_SIZE)
    }
}

impl PageState {
    /// Creates an idle state with the given page size.
    pub fn new(batch_size: usize) -> Self {
        Self {
            album_id: None,
            generation: 0,
            loaded: Vec::new(),
            batch_size: batch_size.max(1),
            phase: FetchPhase::Idle,
            exhausted: false,
        }
    }

    // ===== Queries =====

    /// Currently open album, if any.
    pub fn album_id(&self) -> Option<AlbumId> {
        self.album_id
    }

    /// Current fetch phase.
    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    /// Returns true while a page request is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    /// Returns true once the album has no further assets to fetch.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Loaded identifiers in catalog order.
    pub fn loaded_ids(&self) -> &[AssetId] {
        &self.loaded
    }

    /// Number of loaded assets.
    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    /// Returns true when nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    /// Identifier at a grid index, if loaded.
    pub fn id_at(&self, index: usize) -> Option<AssetId> {
        self.loaded.get(index).copied()
    }

    /// Configured page size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    // ===== Transitions =====

    /// Opens an album, discarding any prior session, and returns the
    /// first page request.
    pub fn open_album(&mut self, album_id: AlbumId) -> PageRequest {
        self.generation += 1;
        self.album_id = Some(album_id);
        self.loaded.clear();
        self.exhausted = false;
        self.phase = FetchPhase::Loading;
        PageRequest {
            album_id,
            generation: self.generation,
            limit: self.batch_size,
        }
    }

    /// Requests the next page when scrolling approaches the end.
    ///
    /// Returns `None` while loading, after exhaustion, or before any
    /// album is open, so repeated triggers never stack fetches.
    pub fn near_end(&mut self) -> Option<PageRequest> {
        let album_id = self.album_id?;
        if self.phase != FetchPhase::Loaded || self.exhausted {
            return None;
        }
        self.phase = FetchPhase::Loading;
        Some(PageRequest {
            album_id,
            generation: self.generation,
            limit: self.loaded.len() + self.batch_size,
        })
    }

    /// Applies a fetched page.
    ///
    /// Responses from a previous album session (stale generation) are
    /// ignored entirely. Otherwise only the tail beyond the already
    /// loaded count is appended, previously loaded entries and their
    /// rendered cells are untouched, and the returned range names the
    /// newly revealed indices.
    pub fn apply(&mut self, generation: u64, assets: &[Asset]) -> Option<Range<usize>> {
        if generation != self.generation {
            return None;
        }
        let requested = self.loaded.len() + self.batch_size;
        let have = self.loaded.len();

        self.loaded
            .extend(assets.iter().skip(have).map(|asset| asset.id));
        self.exhausted = assets.len() < requested;
        self.phase = FetchPhase::Loaded;
        Some(have..self.loaded.len())
    }

    /// Records a failed page fetch.
    ///
    /// Existing data is kept and the phase reverts to `Loaded`, so the
    /// next near-end trigger retries.
    pub fn fetch_failed(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        self.phase = FetchPhase::Loaded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::traits::{Asset, AssetOrigin, MediaKind};

    fn asset(id: AssetId) -> Asset {
        Asset {
            id,
            kind: MediaKind::Image,
            duration_secs: 0.0,
            created_at: Utc::now(),
            is_cloud: false,
            origin: AssetOrigin::Synthetic(id),
        }
    }

    fn assets(range: Range<u64>) -> Vec<Asset> {
        range.map(asset).collect()
    }

    #[test]
    fn open_album_requests_first_batch() {
        let mut pages = PageState::new(100);
        let req = pages.open_album(1);
        assert_eq!(req.limit, 100);
        assert!(pages.is_loading());

        let appended = pages.apply(req.generation, &assets(0..100)).unwrap();
        assert_eq!(appended, 0..100);
        assert_eq!(pages.phase(), FetchPhase::Loaded);
        assert!(!pages.is_exhausted());
    }

    #[test]
    fn near_end_appends_only_the_tail() {
        let mut pages = PageState::new(100);
        let req = pages.open_album(1);
        pages.apply(req.generation, &assets(0..100)).unwrap();

        let req = pages.near_end().unwrap();
        assert_eq!(req.limit, 200);
        let appended = pages.apply(req.generation, &assets(0..200)).unwrap();
        assert_eq!(appended, 100..200);
        assert_eq!(pages.len(), 200);
    }

    #[test]
    fn short_page_marks_exhausted_and_stops_triggers() {
        let mut pages = PageState::new(100);
        let req = pages.open_album(1);
        pages.apply(req.generation, &assets(0..100)).unwrap();
        let req = pages.near_end().unwrap();
        pages.apply(req.generation, &assets(0..200)).unwrap();

        // Catalog holds 250 assets: the third page is partial.
        let req = pages.near_end().unwrap();
        assert_eq!(req.limit, 300);
        let appended = pages.apply(req.generation, &assets(0..250)).unwrap();
        assert_eq!(appended, 200..250);
        assert!(pages.is_exhausted());
        assert_eq!(pages.near_end(), None);
    }

    #[test]
    fn loading_guard_suppresses_duplicate_fetches() {
        let mut pages = PageState::new(10);
        let req = pages.open_album(1);
        pages.apply(req.generation, &assets(0..10)).unwrap();

        assert!(pages.near_end().is_some());
        // Still loading: further triggers are no-ops.
        assert_eq!(pages.near_end(), None);
        assert_eq!(pages.near_end(), None);
    }

    #[test]
    fn album_switch_discards_stale_responses() {
        let mut pages = PageState::new(10);
        let stale = pages.open_album(1);
        let fresh = pages.open_album(2);

        assert_eq!(pages.apply(stale.generation, &assets(0..10)), None);
        assert!(pages.is_empty());
        assert!(pages.is_loading());

        let appended = pages.apply(fresh.generation, &assets(100..105)).unwrap();
        assert_eq!(appended, 0..5);
        assert_eq!(pages.album_id(), Some(2));
    }

    #[test]
    fn failure_keeps_data_and_allows_retry() {
        let mut pages = PageState::new(10);
        let req = pages.open_album(1);
        pages.apply(req.generation, &assets(0..10)).unwrap();

        let req = pages.near_end().unwrap();
        pages.fetch_failed(req.generation);
        assert_eq!(pages.phase(), FetchPhase::Loaded);
        assert_eq!(pages.len(), 10);

        // Retry succeeds.
        let req = pages.near_end().unwrap();
        let appended = pages.apply(req.generation, &assets(0..15)).unwrap();
        assert_eq!(appended, 10..15);
    }
}
