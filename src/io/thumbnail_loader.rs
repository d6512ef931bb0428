//! Asynchronous thumbnail loading and texture caching.
//!
//! A single worker thread decodes thumbnails off the GUI thread.
//! Results are keyed by asset id, so a cell that has been recycled for
//! a different asset never shows a stale image: the texture lookup is
//! by id, not by cell position.

use eframe::egui;
use rpicker::{AssetCatalog, AssetId, DynCatalog, ThumbnailPixels};
use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// Work item sent to the decode thread.
struct ThumbnailRequest {
    asset_id: AssetId,
    target_px: u32,
    generation: u64,
}

/// Decoded thumbnail coming back from the worker.
struct ThumbnailResponse {
    asset_id: AssetId,
    generation: u64,
    result: Result<ThumbnailPixels, String>,
}

/// Loads thumbnails on a background thread and caches GPU textures.
///
/// One loader serves one catalog; opening a different catalog replaces
/// the loader. Switching albums keeps the loader but calls `reset()`,
/// which bumps the generation so late responses from the previous
/// album's requests are discarded.
pub struct ThumbnailLoader {
    request_tx: Option<Sender<ThumbnailRequest>>,
    response_rx: Receiver<ThumbnailResponse>,

    /// Ids with a request in flight
    pending: HashSet<AssetId>,
    /// Ids whose decode failed; not retried until reset
    failed: HashSet<AssetId>,
    /// Uploaded textures by asset id
    textures: HashMap<AssetId, egui::TextureHandle>,

    generation: u64,
}

impl ThumbnailLoader {
    /// Creates a loader with a worker thread bound to the given catalog.
    pub fn new(catalog: Arc<DynCatalog>) -> Self {
        let (request_tx, request_rx) = channel::<ThumbnailRequest>();
        let (response_tx, response_rx) = channel::<ThumbnailResponse>();

        thread::spawn(move || {
            // Exits when the loader drops its sender
            while let Ok(request) = request_rx.recv() {
                let result = catalog
                    .load_thumbnail(request.asset_id, request.target_px)
                    .map_err(|e| e.to_string());
                if response_tx
                    .send(ThumbnailResponse {
                        asset_id: request.asset_id,
                        generation: request.generation,
                        result,
                    })
                    .is_err()
                {
                    break;
                }
            }
        });

        Self {
            request_tx: Some(request_tx),
            response_rx,
            pending: HashSet::new(),
            failed: HashSet::new(),
            textures: HashMap::new(),
            generation: 0,
        }
    }

    /// Returns the cached texture for an asset, if decoded already.
    pub fn texture(&self, asset_id: AssetId) -> Option<&egui::TextureHandle> {
        self.textures.get(&asset_id)
    }

    /// Returns true if the asset's thumbnail failed to decode.
    pub fn has_failed(&self, asset_id: AssetId) -> bool {
        self.failed.contains(&asset_id)
    }

    /// Queues a thumbnail decode unless one is cached, pending or failed.
    pub fn request(&mut self, asset_id: AssetId, target_px: u32) {
        if self.textures.contains_key(&asset_id)
            || self.pending.contains(&asset_id)
            || self.failed.contains(&asset_id)
        {
            return;
        }
        if let Some(tx) = &self.request_tx {
            if tx
                .send(ThumbnailRequest {
                    asset_id,
                    target_px,
                    generation: self.generation,
                })
                .is_ok()
            {
                self.pending.insert(asset_id);
            }
        }
    }

    /// Uploads finished thumbnails as textures.
    ///
    /// Call once per frame before drawing the grid. Responses from a
    /// generation older than the last `reset()` are dropped.
    pub fn drain_results(&mut self, ctx: &egui::Context) {
        while let Ok(response) = self.response_rx.try_recv() {
            self.pending.remove(&response.asset_id);
            if response.generation != self.generation {
                continue;
            }
            match response.result {
                Ok(pixels) => {
                    let image = egui::ColorImage::from_rgba_unmultiplied(
                        [pixels.width as usize, pixels.height as usize],
                        &pixels.rgba,
                    );
                    let texture = ctx.load_texture(
                        format!("thumb-{}", response.asset_id),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.textures.insert(response.asset_id, texture);
                }
                Err(_) => {
                    self.failed.insert(response.asset_id);
                }
            }
        }
    }

    /// Discards all cached and in-flight thumbnails.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.pending.clear();
        self.failed.clear();
        self.textures.clear();
    }
}

impl Drop for ThumbnailLoader {
    fn drop(&mut self) {
        // Closing the channel lets the worker thread exit
        self.request_tx = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpicker::VirtualCatalog;

    #[test]
    fn test_request_dedup() {
        let catalog = Arc::new(DynCatalog::Virtual(VirtualCatalog::with_config(10, 1)));
        let first_id = catalog
            .fetch_assets(rpicker::virtual_catalog::ALBUM_ALL_MEDIA, 1)
            .unwrap()[0]
            .id;

        let mut loader = ThumbnailLoader::new(catalog);
        loader.request(first_id, 64);
        assert!(loader.pending.contains(&first_id));
        // A second request for the same id is a no-op
        loader.request(first_id, 64);
        assert_eq!(loader.pending.len(), 1);
    }

    #[test]
    fn test_reset_clears_caches() {
        let catalog = Arc::new(DynCatalog::Virtual(VirtualCatalog::with_config(10, 1)));
        let mut loader = ThumbnailLoader::new(catalog);
        loader.failed.insert(99);
        loader.pending.insert(7);
        let generation = loader.generation;

        loader.reset();
        assert!(loader.failed.is_empty());
        assert!(loader.pending.is_empty());
        assert_eq!(loader.generation, generation + 1);
    }
}
