//! Synthetic in-memory asset catalog.
//!
//! Generates a reproducible media library from a seed: useful for the
//! demo GUI without touching the filesystem and for exercising the
//! pagination and selection machinery in tests. Thumbnails are
//! procedural color tiles derived from each asset's seed.

use std::collections::HashMap;

use chrono::{DateTime, Duration, TimeZone, Utc};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::traits::{
    Album, AlbumId, Asset, AssetCatalog, AssetId, AssetOrigin, Authorization, CatalogError,
    MediaKind, ThumbnailPixels,
};

pub const ALBUM_ALL_MEDIA: AlbumId = 1;
pub const ALBUM_IMAGES: AlbumId = 2;
pub const ALBUM_VIDEOS: AlbumId = 3;
pub const ALBUM_RECENTS: AlbumId = 4;

const DEFAULT_ASSET_COUNT: usize = 250;
const DEFAULT_SEED: u64 = 42;
const RECENT_WINDOW_DAYS: i64 = 30;

/// Fixed newest-asset timestamp so generated libraries are identical
/// across runs.
static LIBRARY_EPOCH: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap());

/// Seeded synthetic catalog.
pub struct VirtualCatalog {
    /// All assets, newest first.
    assets: Vec<Asset>,
    assets_by_id: HashMap<AssetId, usize>,
    authorization: Authorization,
}

impl Default for VirtualCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualCatalog {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_ASSET_COUNT, DEFAULT_SEED)
    }

    /// Generates `asset_count` assets from the given seed.
    pub fn with_config(asset_count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut created_at = *LIBRARY_EPOCH;
        let mut assets = Vec::with_capacity(asset_count);

        for index in 0..asset_count {
            let is_video = rng.gen_bool(0.25);
            let duration_secs = if is_video {
                rng.gen_range(3.0..600.0)
            } else {
                0.0
            };
            assets.push(Asset {
                id: index as AssetId + 1,
                kind: if is_video {
                    MediaKind::Video
                } else {
                    MediaKind::Image
                },
                duration_secs,
                created_at,
                is_cloud: rng.gen_bool(0.1),
                origin: AssetOrigin::Synthetic(rng.gen()),
            });
            // Descending creation dates, a couple of minutes to a day apart.
            created_at -= Duration::seconds(rng.gen_range(120..86_400));
        }

        let assets_by_id = assets
            .iter()
            .enumerate()
            .map(|(index, asset)| (asset.id, index))
            .collect();

        Self {
            assets,
            assets_by_id,
            authorization: Authorization::Granted,
        }
    }

    /// Overrides the authorization answer; used to exercise the denied
    /// flow without a real permission prompt.
    pub fn with_authorization(mut self, authorization: Authorization) -> Self {
        self.authorization = authorization;
        self
    }

    fn album_admits(&self, album: AlbumId, asset: &Asset) -> bool {
        match album {
            ALBUM_ALL_MEDIA => true,
            ALBUM_IMAGES => asset.kind == MediaKind::Image,
            ALBUM_VIDEOS => asset.kind == MediaKind::Video,
            ALBUM_RECENTS => {
                *LIBRARY_EPOCH - asset.created_at <= Duration::days(RECENT_WINDOW_DAYS)
            }
            _ => false,
        }
    }

    fn is_known_album(album: AlbumId) -> bool {
        matches!(
            album,
            ALBUM_ALL_MEDIA | ALBUM_IMAGES | ALBUM_VIDEOS | ALBUM_RECENTS
        )
    }
}

impl AssetCatalog for VirtualCatalog {
    fn request_authorization(&self) -> Authorization {
        self.authorization
    }

    fn list_albums(&self) -> Vec<Album> {
        vec![
            Album {
                id: ALBUM_ALL_MEDIA,
                title: "All Media".to_string(),
                kind_filter: None,
            },
            Album {
                id: ALBUM_RECENTS,
                title: "Recents".to_string(),
                kind_filter: None,
            },
            Album {
                id: ALBUM_IMAGES,
                title: "Images".to_string(),
                kind_filter: Some(MediaKind::Image),
            },
            Album {
                id: ALBUM_VIDEOS,
                title: "Videos".to_string(),
                kind_filter: Some(MediaKind::Video),
            },
        ]
    }

    fn count_assets(&self, album: AlbumId) -> usize {
        self.assets
            .iter()
            .filter(|asset| self.album_admits(album, asset))
            .count()
    }

    fn fetch_assets(&self, album: AlbumId, limit: usize) -> Result<Vec<Asset>, CatalogError> {
        if !Self::is_known_album(album) {
            return Err(CatalogError::AlbumNotFound(album));
        }
        // Assets are generated newest first, so filtering preserves the
        // creation-date-descending order the contract requires.
        Ok(self
            .assets
            .iter()
            .filter(|asset| self.album_admits(album, asset))
            .take(limit)
            .cloned()
            .collect())
    }

    fn get_asset(&self, id: AssetId) -> Option<Asset> {
        self.assets_by_id
            .get(&id)
            .map(|&index| self.assets[index].clone())
    }

    fn load_thumbnail(&self, id: AssetId, target_px: u32) -> Result<ThumbnailPixels, CatalogError> {
        let asset = self.get_asset(id).ok_or(CatalogError::AssetNotFound(id))?;
        let seed = match asset.origin {
            AssetOrigin::Synthetic(seed) => seed,
            AssetOrigin::Path(_) => 0,
        };

        let mut rng = StdRng::seed_from_u64(seed);
        let base = [
            rng.gen_range(60u16..220) as u8,
            rng.gen_range(60u16..220) as u8,
            rng.gen_range(60u16..220) as u8,
        ];
        // Videos render darker so the two kinds are visually distinct.
        let dim = if asset.is_video() { 2 } else { 1 };

        let side = target_px.max(1);
        let mut rgba = Vec::with_capacity((side * side * 4) as usize);
        for y in 0..side {
            // Vertical gradient: fade toward black at the bottom.
            let fade = 255 - (y * 96 / side) as u16;
            for _x in 0..side {
                for channel in base {
                    rgba.push((channel as u16 * fade / 255 / dim) as u8);
                }
                rgba.push(255);
            }
        }
        Ok(ThumbnailPixels {
            width: side,
            height: side,
            rgba,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let a = VirtualCatalog::with_config(50, 7);
        let b = VirtualCatalog::with_config(50, 7);
        assert_eq!(a.fetch_assets(ALBUM_ALL_MEDIA, 50).unwrap(),
                   b.fetch_assets(ALBUM_ALL_MEDIA, 50).unwrap());
    }

    #[test]
    fn assets_are_sorted_newest_first() {
        let catalog = VirtualCatalog::new();
        let assets = catalog.fetch_assets(ALBUM_ALL_MEDIA, 250).unwrap();
        for pair in assets.windows(2) {
            assert!(pair[0].created_at > pair[1].created_at);
        }
    }

    #[test]
    fn limit_truncates_and_requery_extends_the_prefix() {
        let catalog = VirtualCatalog::new();
        let first = catalog.fetch_assets(ALBUM_ALL_MEDIA, 100).unwrap();
        let second = catalog.fetch_assets(ALBUM_ALL_MEDIA, 200).unwrap();
        assert_eq!(first.len(), 100);
        assert_eq!(second.len(), 200);
        assert_eq!(&second[..100], &first[..]);
    }

    #[test]
    fn kind_albums_partition_all_media() {
        let catalog = VirtualCatalog::new();
        let images = catalog.count_assets(ALBUM_IMAGES);
        let videos = catalog.count_assets(ALBUM_VIDEOS);
        assert_eq!(images + videos, catalog.count_assets(ALBUM_ALL_MEDIA));
        assert!(videos > 0, "seeded library should contain videos");
    }

    #[test]
    fn unknown_album_is_an_error() {
        let catalog = VirtualCatalog::new();
        assert!(matches!(
            catalog.fetch_assets(999, 10),
            Err(CatalogError::AlbumNotFound(999))
        ));
    }

    #[test]
    fn thumbnails_match_the_requested_size() {
        let catalog = VirtualCatalog::new();
        let thumb = catalog.load_thumbnail(1, 64).unwrap();
        assert_eq!(thumb.width, 64);
        assert_eq!(thumb.height, 64);
        assert_eq!(thumb.rgba.len(), 64 * 64 * 4);
    }

    #[test]
    fn videos_carry_durations() {
        let catalog = VirtualCatalog::new();
        for asset in catalog.fetch_assets(ALBUM_VIDEOS, 50).unwrap() {
            assert!(asset.duration_secs > 0.0);
        }
    }
}
