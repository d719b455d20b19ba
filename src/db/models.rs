use serde::{Deserialize, Serialize};

use crate::optimize::metadata::ImageMetadata;

/// Synchronization status recorded with an image row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    /// The image has been uploaded and its row recorded
    Synced,
}

impl SyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncStatus::Synced => "synced",
        }
    }
}

/// A row to insert into the `images` collection.
///
/// Created exactly once per successful upload and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewImage {
    /// Account the image belongs to
    pub account_id: String,
    /// Metadata derived from the source asset
    pub metadata: ImageMetadata,
    /// Public URL of the uploaded object
    pub image_url: String,
    pub sync_status: SyncStatus,
}
