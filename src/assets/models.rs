use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// A reference to a photo stored in the local media library.
///
/// Owned by the library on disk; read-only to this application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Location of the photo file
    pub uri: PathBuf,
    /// File name including extension
    pub filename: String,
    /// Pixel width of the photo
    pub width: u32,
    /// Pixel height of the photo
    pub height: u32,
    /// When the photo was created
    pub creation_time: DateTime<Utc>,
    /// When the photo was last modified
    pub modification_time: DateTime<Utc>,
}
