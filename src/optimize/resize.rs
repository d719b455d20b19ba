use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::GenericImageView;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

use crate::optimize::error::OptimizeError;
use crate::optimize::optimizer::{ImageOptimizer, OptimizedImage};

/// Images wider than this are scaled down before upload
const MAX_WIDTH: u32 = 1200;

/// JPEG re-encoding quality (the 0.8 compression factor)
const JPEG_QUALITY: u8 = 80;

/// Production optimizer: resize to at most [`MAX_WIDTH`] pixels wide and
/// re-encode as JPEG at fixed quality, writing the result to a temp file.
#[derive(Debug, Clone, Default)]
pub struct ResizeOptimizer;

impl ResizeOptimizer {
    pub fn new() -> Self {
        ResizeOptimizer
    }
}

#[async_trait]
impl ImageOptimizer for ResizeOptimizer {
    async fn optimize(&self, source: &Path) -> Result<OptimizedImage, OptimizeError> {
        let source = source.to_path_buf();
        // Decode/resize/encode is CPU-bound, keep it off the async runtime
        tokio::task::spawn_blocking(move || optimize_blocking(&source))
            .await
            .map_err(|e| OptimizeError::Other(anyhow::anyhow!("Optimize task failed: {}", e)))?
    }
}

fn optimize_blocking(source: &Path) -> Result<OptimizedImage, OptimizeError> {
    debug!("Optimizing image: {}", source.display());

    let img = image::open(source)
        .map_err(|e| OptimizeError::DecodeError(source.display().to_string(), e.to_string()))?;

    let (width, height) = img.dimensions();
    let img = if width > MAX_WIDTH {
        let scaled_height =
            ((height as f64) * (MAX_WIDTH as f64) / (width as f64)).round().max(1.0) as u32;
        img.resize_exact(MAX_WIDTH, scaled_height, FilterType::Triangle)
    } else {
        img
    };

    // JPEG has no alpha channel
    let rgb = img.to_rgb8();

    let output_path = std::env::temp_dir().join(format!("{}.jpeg", Uuid::new_v4()));
    let file = File::create(&output_path)?;
    let mut writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(|e| OptimizeError::EncodeError(e.to_string()))?;
    writer.flush()?;

    let (out_width, out_height) = rgb.dimensions();
    debug!(
        "Optimized image written to {} ({}x{})",
        output_path.display(),
        out_width,
        out_height
    );

    Ok(OptimizedImage {
        path: output_path,
        width: out_width,
        height: out_height,
    })
}
