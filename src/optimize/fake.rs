use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::optimize::error::OptimizeError;
use crate::optimize::optimizer::{ImageOptimizer, OptimizedImage};

/// Bytes written into every fake optimized file
pub const FAKE_OPTIMIZED_BYTES: &[u8] = b"fake-optimized-jpeg-bytes";

/// A fake in-memory implementation of the ImageOptimizer trait for testing.
/// Records every call and writes a small placeholder file instead of
/// performing a real transform.
#[derive(Clone)]
pub struct FakeOptimizer {
    calls: Arc<RwLock<Vec<PathBuf>>>,
    output_dir: Arc<tempfile::TempDir>,
    fail: Arc<RwLock<bool>>,
}

impl FakeOptimizer {
    /// Create a new FakeOptimizer writing placeholder files into a temp dir
    pub fn new() -> Self {
        FakeOptimizer {
            calls: Arc::new(RwLock::new(Vec::new())),
            output_dir: Arc::new(tempfile::tempdir().expect("failed to create temp dir")),
            fail: Arc::new(RwLock::new(false)),
        }
    }

    /// Make every subsequent optimize call fail
    pub fn fake_fail(&self) {
        *self.fail.write().unwrap() = true;
    }

    /// Sources the optimizer has been asked to transform, in call order
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.read().unwrap().clone()
    }
}

impl Default for FakeOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageOptimizer for FakeOptimizer {
    async fn optimize(&self, source: &Path) -> Result<OptimizedImage, OptimizeError> {
        self.calls.write().unwrap().push(source.to_path_buf());

        if *self.fail.read().unwrap() {
            return Err(OptimizeError::DecodeError(
                source.display().to_string(),
                "injected failure".to_string(),
            ));
        }

        let path = self.output_dir.path().join(format!("{}.jpeg", Uuid::new_v4()));
        std::fs::write(&path, FAKE_OPTIMIZED_BYTES)?;

        Ok(OptimizedImage {
            path,
            width: 1200,
            height: 800,
        })
    }
}
