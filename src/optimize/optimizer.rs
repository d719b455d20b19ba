use crate::optimize::error::OptimizeError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// An ephemeral resized-and-recompressed copy of an asset.
///
/// Lives for the duration of one sync attempt; read once to produce the
/// upload bytes, then abandoned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizedImage {
    /// Location of the optimized file
    pub path: PathBuf,
    /// Pixel width after resizing
    pub width: u32,
    /// Pixel height after resizing
    pub height: u32,
}

/// ImageOptimizer trait defining the interface for the image transform surface
#[async_trait]
pub trait ImageOptimizer: Send + Sync + 'static {
    /// Produce a size/quality-reduced JPEG copy of the image at `source`
    async fn optimize(&self, source: &Path) -> Result<OptimizedImage, OptimizeError>;
}

/// Implementation of ImageOptimizer trait for Arc<T> where T implements ImageOptimizer
///
/// This allows sharing optimizer instances across threads and components efficiently.
#[async_trait]
impl<T: ImageOptimizer + ?Sized> ImageOptimizer for Arc<T> {
    async fn optimize(&self, source: &Path) -> Result<OptimizedImage, OptimizeError> {
        (**self).optimize(source).await
    }
}
