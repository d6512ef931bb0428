//! Directory-backed asset catalog.
//!
//! Treats a root folder as the library: files directly inside it and in
//! its immediate subdirectories are assets, each subdirectory is an
//! album, and a synthetic "All Media" album spans everything. Media is
//! recognized by extension; creation dates come from filesystem
//! metadata. The scan happens once at construction, after which the
//! catalog is immutable and safely shareable with loader threads.

use std::collections::HashMap;
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::traits::{
    Album, AlbumId, Asset, AssetCatalog, AssetId, AssetOrigin, Authorization, CatalogError,
    MediaKind, ThumbnailPixels,
};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "tif", "tiff"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov", "webm", "mkv", "avi"];

const ALL_MEDIA_ALBUM_ID: AlbumId = 1;

/// Immutable snapshot of a media folder.
pub struct FolderCatalog {
    root: PathBuf,
    /// All assets, newest first.
    assets: Vec<Asset>,
    assets_by_id: HashMap<AssetId, usize>,
    /// Album membership: asset id -> owning album (besides All Media).
    album_of: HashMap<AssetId, AlbumId>,
    albums: Vec<Album>,
}

impl FolderCatalog {
    /// Scans `root` and builds the catalog.
    ///
    /// Unreadable subdirectories and unrecognized files are skipped; an
    /// unreadable root is an error.
    pub fn scan(root: &Path) -> Result<Self, CatalogError> {
        let mut albums = vec![Album {
            id: ALL_MEDIA_ALBUM_ID,
            title: "All Media".to_string(),
            kind_filter: None,
        }];
        // (created_at, path, owning album) triples collected before ids
        // are assigned, so ids follow the sorted order.
        let mut found: Vec<(DateTime<Utc>, PathBuf, AlbumId)> = Vec::new();
        let mut next_album_id = ALL_MEDIA_ALBUM_ID + 1;

        let entries = fs::read_dir(root).map_err(|source| CatalogError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                let album_id = next_album_id;
                let before = found.len();
                if let Ok(children) = fs::read_dir(&path) {
                    for child in children.flatten() {
                        collect_media_file(&child.path(), album_id, &mut found);
                    }
                }
                // Empty directories don't become albums.
                if found.len() > before {
                    let title = path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "Untitled".to_string());
                    albums.push(Album {
                        id: album_id,
                        title,
                        kind_filter: None,
                    });
                    next_album_id += 1;
                }
            } else {
                collect_media_file(&path, ALL_MEDIA_ALBUM_ID, &mut found);
            }
        }

        // Newest first, ties broken by path for a stable order.
        found.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

        let mut assets = Vec::with_capacity(found.len());
        let mut album_of = HashMap::new();
        for (index, (created_at, path, album_id)) in found.into_iter().enumerate() {
            let id = index as AssetId + 1;
            let kind = media_kind(&path).unwrap_or(MediaKind::Image);
            let duration_secs = if kind == MediaKind::Video {
                probe_mp4_duration(&path).unwrap_or(0.0)
            } else {
                0.0
            };
            album_of.insert(id, album_id);
            assets.push(Asset {
                id,
                kind,
                duration_secs,
                created_at,
                // Local files are never cloud-resident.
                is_cloud: false,
                origin: AssetOrigin::Path(path),
            });
        }

        let assets_by_id = assets
            .iter()
            .enumerate()
            .map(|(index, asset)| (asset.id, index))
            .collect();

        Ok(Self {
            root: root.to_path_buf(),
            assets,
            assets_by_id,
            album_of,
            albums,
        })
    }

    /// Root directory this catalog was built from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn album_admits(&self, album: AlbumId, asset: &Asset) -> bool {
        album == ALL_MEDIA_ALBUM_ID || self.album_of.get(&asset.id) == Some(&album)
    }
}

impl AssetCatalog for FolderCatalog {
    fn request_authorization(&self) -> Authorization {
        // Re-check on every request: access can be revoked underneath us.
        match fs::read_dir(&self.root) {
            Ok(_) => Authorization::Granted,
            Err(_) => Authorization::Denied,
        }
    }

    fn list_albums(&self) -> Vec<Album> {
        self.albums.clone()
    }

    fn count_assets(&self, album: AlbumId) -> usize {
        self.assets
            .iter()
            .filter(|asset| self.album_admits(album, asset))
            .count()
    }

    fn fetch_assets(&self, album: AlbumId, limit: usize) -> Result<Vec<Asset>, CatalogError> {
        if !self.albums.iter().any(|a| a.id == album) {
            return Err(CatalogError::AlbumNotFound(album));
        }
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
        let path = match &asset.origin {
            AssetOrigin::Path(path) => path.clone(),
            AssetOrigin::Synthetic(_) => return Err(CatalogError::AssetNotFound(id)),
        };

        if asset.is_video() {
            // Decoding video frames is out of scope: flat placeholder.
            return Ok(placeholder_thumbnail(target_px.max(1)));
        }

        let decoded = image::open(&path).map_err(|source| CatalogError::Decode {
            path: path.clone(),
            source,
        })?;
        let side = target_px.max(1);
        let thumb = decoded.thumbnail(side, side).to_rgba8();
        Ok(ThumbnailPixels {
            width: thumb.width(),
            height: thumb.height(),
            rgba: thumb.into_raw(),
        })
    }
}

/// Records `path` if it looks like a media file.
fn collect_media_file(path: &Path, album_id: AlbumId, out: &mut Vec<(DateTime<Utc>, PathBuf, AlbumId)>) {
    if !path.is_file() || media_kind(path).is_none() {
        return;
    }
    out.push((file_created_at(path), path.to_path_buf(), album_id));
}

/// Media kind from the file extension, or `None` for non-media files.
fn media_kind(path: &Path) -> Option<MediaKind> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// Best-effort creation timestamp: birth time where the filesystem has
/// one, otherwise the modification time, otherwise the epoch.
fn file_created_at(path: &Path) -> DateTime<Utc> {
    fs::metadata(path)
        .ok()
        .and_then(|meta| meta.created().or_else(|_| meta.modified()).ok())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH)
}

/// Reads the duration of an MP4-family container, if parseable.
fn probe_mp4_duration(path: &Path) -> Option<f64> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    if ext != "mp4" && ext != "m4v" && ext != "mov" {
        return None;
    }
    let file = fs::File::open(path).ok()?;
    let size = file.metadata().ok()?.len();
    let reader = BufReader::new(file);
    let mp4 = mp4::Mp4Reader::read_header(reader, size).ok()?;
    Some(mp4.duration().as_secs_f64())
}

/// Neutral dark tile shown for assets without a decodable thumbnail.
fn placeholder_thumbnail(side: u32) -> ThumbnailPixels {
    let mut rgba = Vec::with_capacity((side * side * 4) as usize);
    for _ in 0..side * side {
        rgba.extend_from_slice(&[40, 40, 46, 255]);
    }
    ThumbnailPixels {
        width: side,
        height: side,
        rgba,
    }
}
