use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::assets::models::Asset;
use crate::config::LibraryConfig;

/// Maximum number of assets returned by a single listing
pub const MAX_ASSETS: usize = 100;

/// File extensions treated as photos
const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff"];

/// Outcome of requesting read access to the photo library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Lists photo assets from a local library directory.
///
/// Access that cannot be granted yields an empty listing rather than an
/// error, mirroring how a denied media-library permission behaves.
pub struct AssetLister {
    library_path: PathBuf,
}

impl AssetLister {
    /// Create a new lister over the configured library directory
    pub fn new(config: &LibraryConfig) -> Self {
        AssetLister {
            library_path: PathBuf::from(&config.path),
        }
    }

    /// Request read access to the library directory
    pub fn request_access(&self) -> PermissionStatus {
        match fs::read_dir(&self.library_path) {
            Ok(_) => PermissionStatus::Granted,
            Err(e) => {
                warn!(
                    "Access to photo library {} denied: {}",
                    self.library_path.display(),
                    e
                );
                PermissionStatus::Denied
            }
        }
    }

    /// List up to [`MAX_ASSETS`] photo assets from the library.
    ///
    /// Returns an empty list when access is denied. Entries that cannot be
    /// read as images are skipped.
    pub fn list_photos(&self) -> Vec<Asset> {
        if self.request_access() == PermissionStatus::Denied {
            return Vec::new();
        }

        let mut assets = Vec::new();
        for entry in WalkDir::new(&self.library_path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if assets.len() >= MAX_ASSETS {
                break;
            }
            if !is_photo(entry.path()) {
                continue;
            }
            match read_asset(entry.path()) {
                Some(asset) => assets.push(asset),
                None => debug!("Skipping unreadable asset: {}", entry.path().display()),
            }
        }

        debug!(
            "Listed {} photo assets from {}",
            assets.len(),
            self.library_path.display()
        );
        assets
    }
}

fn is_photo(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| PHOTO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn read_asset(path: &Path) -> Option<Asset> {
    let filename = path.file_name()?.to_str()?.to_string();
    let (width, height) = image::image_dimensions(path).ok()?;
    let metadata = fs::metadata(path).ok()?;

    let modification_time = metadata
        .modified()
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now());
    // Creation time is not available on every filesystem
    let creation_time = metadata
        .created()
        .map(DateTime::<Utc>::from)
        .unwrap_or(modification_time);

    Some(Asset {
        uri: path.to_path_buf(),
        filename,
        width,
        height,
        creation_time,
        modification_time,
    })
}
