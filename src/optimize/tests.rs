use chrono::{TimeZone, Utc};
use image::{GenericImageView, RgbImage};
use std::path::PathBuf;

use crate::assets::models::Asset;
use crate::optimize::metadata::derive_metadata;
use crate::optimize::optimizer::ImageOptimizer;
use crate::optimize::resize::ResizeOptimizer;

fn test_asset(filename: &str) -> Asset {
    Asset {
        uri: PathBuf::from(format!("/photos/{}", filename)),
        filename: filename.to_string(),
        width: 3000,
        height: 2000,
        creation_time: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        modification_time: Utc.with_ymd_and_hms(2024, 5, 2, 8, 30, 0).unwrap(),
    }
}

#[test]
fn metadata_splits_extension_from_filename() {
    let metadata = derive_metadata(&test_asset("IMG_001.png"));

    assert_eq!(metadata.unique_id, "IMG_001");
    assert_eq!(metadata.extension, "png");
    assert_eq!(metadata.filename, "IMG_001.png");
}

#[test]
fn metadata_defaults_extension_when_filename_has_no_dot() {
    let metadata = derive_metadata(&test_asset("IMG001"));

    assert_eq!(metadata.unique_id, "IMG001");
    assert_eq!(metadata.extension, "jpeg");
}

#[test]
fn metadata_keeps_all_but_last_dot_segment_in_identifier() {
    let metadata = derive_metadata(&test_asset("my.photo.album.JPG"));

    assert_eq!(metadata.unique_id, "my.photo.album");
    assert_eq!(metadata.extension, "jpg");
}

#[test]
fn metadata_defaults_extension_for_trailing_dot() {
    let metadata = derive_metadata(&test_asset("photo."));

    assert_eq!(metadata.unique_id, "photo");
    assert_eq!(metadata.extension, "jpeg");
}

#[test]
fn metadata_copies_dimensions_and_timestamps() {
    let asset = test_asset("vacation.jpg");
    let metadata = derive_metadata(&asset);

    assert_eq!(metadata.width, 3000);
    assert_eq!(metadata.height, 2000);
    assert_eq!(metadata.creation_time, asset.creation_time);
    assert_eq!(metadata.modification_time, asset.modification_time);
}

#[tokio::test]
async fn optimizer_scales_wide_images_down_to_max_width() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("wide.png");
    RgbImage::from_pixel(2400, 1200, image::Rgb([120, 30, 30]))
        .save(&source)
        .unwrap();

    let optimized = ResizeOptimizer::new().optimize(&source).await.unwrap();

    assert_eq!(optimized.width, 1200);
    assert_eq!(optimized.height, 600);

    // The optimized file must decode as a JPEG with the reported dimensions
    let reloaded = image::open(&optimized.path).unwrap();
    assert_eq!(reloaded.dimensions(), (1200, 600));
}

#[tokio::test]
async fn optimizer_leaves_narrow_images_unscaled() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("small.png");
    RgbImage::from_pixel(800, 600, image::Rgb([0, 80, 200]))
        .save(&source)
        .unwrap();

    let optimized = ResizeOptimizer::new().optimize(&source).await.unwrap();

    assert_eq!(optimized.width, 800);
    assert_eq!(optimized.height, 600);
}

#[tokio::test]
async fn optimizer_fails_on_unreadable_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("not-an-image.jpg");
    std::fs::write(&source, b"definitely not image data").unwrap();

    let result = ResizeOptimizer::new().optimize(&source).await;

    assert!(result.is_err(), "garbage input should fail to decode");
}

#[tokio::test]
async fn optimizer_fails_on_missing_source() {
    let result = ResizeOptimizer::new()
        .optimize(std::path::Path::new("/nonexistent/photo.jpg"))
        .await;

    assert!(result.is_err());
}
