//! Asynchronous asset page fetching.
//!
//! Runs catalog queries in background threads so the GUI stays
//! responsive while a page of assets is being assembled.

use eframe::egui;
use rpicker::{Asset, AssetCatalog, DynCatalog, PageRequest};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;

/// Result of a completed page fetch.
pub enum PageResult {
    /// Fetch completed successfully
    Success {
        /// Generation the request was issued under
        generation: u64,
        /// Full asset list up to the requested limit
        assets: Vec<Asset>,
    },
    /// Fetch failed with an error
    Error {
        /// Generation the request was issued under
        generation: u64,
        /// Error message for display
        message: String,
    },
    /// No fetch in progress
    None,
}

/// Coordinates background page fetches with the main GUI thread.
///
/// At most one fetch runs at a time; the pagination state machine
/// guarantees no new request is issued while one is in flight.
pub struct PageLoader {
    /// Channel receiver for the in-flight fetch, tagged with its generation
    receiver: Option<(u64, Receiver<Result<Vec<Asset>, String>>)>,
}

impl PageLoader {
    /// Creates a new page loader with no active fetch.
    pub fn new() -> Self {
        Self { receiver: None }
    }

    /// Checks if a fetch is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.receiver.is_some()
    }

    /// Starts fetching a page of assets asynchronously.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `catalog` - Catalog to query
    /// * `request` - Album, generation and limit to fetch
    /// * `ctx` - egui context for requesting a repaint on completion
    pub fn start_fetch(&mut self, catalog: Arc<DynCatalog>, request: PageRequest, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.receiver = Some((request.generation, receiver));

        let ctx_handle = ctx.clone();

        // Spawn background thread for the catalog query
        thread::spawn(move || {
            let result = catalog
                .fetch_assets(request.album_id, request.limit)
                .map_err(|e| e.to_string());

            // Send result through channel
            let _ = sender.send(result);

            // Notify GUI thread to repaint
            ctx_handle.request_repaint();
        });
    }

    /// Checks if the background fetch has completed and returns the result.
    ///
    /// Call once per frame in the update loop.
    pub fn check_completion(&mut self) -> PageResult {
        if let Some((generation, receiver)) = &self.receiver {
            if let Ok(result) = receiver.try_recv() {
                let generation = *generation;
                self.receiver = None;
                return match result {
                    Ok(assets) => PageResult::Success { generation, assets },
                    Err(message) => PageResult::Error { generation, message },
                };
            }
        }

        PageResult::None
    }
}

impl Default for PageLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_loader_creation() {
        let loader = PageLoader::new();
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = PageLoader::new();
        assert!(matches!(loader.check_completion(), PageResult::None));
    }
}
