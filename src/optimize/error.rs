use thiserror::Error;

/// Errors that can occur while optimizing an image for upload
#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("Failed to decode image {0}: {1}")]
    DecodeError(String, String),

    #[error("Failed to encode optimized image: {0}")]
    EncodeError(String),

    #[error("I/O error while optimizing image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other optimize error: {0}")]
    Other(#[from] anyhow::Error),
}
