use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assets::models::Asset;

/// Extension assumed when a filename carries none
const DEFAULT_EXTENSION: &str = "jpeg";

/// Descriptive metadata derived from an asset, recorded alongside the
/// uploaded copy. Computed fresh on every sync attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    pub creation_time: DateTime<Utc>,
    pub modification_time: DateTime<Utc>,
    /// Original file name including extension
    pub filename: String,
    /// Filename with its extension removed; stable across sync attempts,
    /// so it doubles as the remote object key stem
    pub unique_id: String,
    /// Lower-cased extension, "jpeg" when the filename has none
    pub extension: String,
}

/// Derive metadata from an asset. Pure, no I/O.
///
/// The filename is split on its last `.`: the suffix becomes the
/// lower-cased extension and the rest becomes the unique identifier. A
/// filename without a dot keeps its full name as the identifier.
pub fn derive_metadata(asset: &Asset) -> ImageMetadata {
    let (unique_id, extension) = match asset.filename.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() => (stem.to_string(), ext.to_lowercase()),
        Some((stem, _)) => (stem.to_string(), DEFAULT_EXTENSION.to_string()),
        None => (asset.filename.clone(), DEFAULT_EXTENSION.to_string()),
    };

    ImageMetadata {
        width: asset.width,
        height: asset.height,
        creation_time: asset.creation_time,
        modification_time: asset.modification_time,
        filename: asset.filename.clone(),
        unique_id,
        extension,
    }
}
