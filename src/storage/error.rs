use thiserror::Error;

/// Errors that can occur when interacting with object storage
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to connect to storage: {0}")]
    ConnectionError(String),

    #[error("Object with key {0} not found")]
    ObjectNotFound(String),

    #[error("Object with key {0} already exists")]
    ObjectAlreadyExists(String),

    #[error("Access denied for object {0}: {1}")]
    AccessDenied(String, String),

    #[error("Failed to upload object {0}: {1}")]
    UploadError(String, String),

    #[error("Failed to read object {0}: {1}")]
    ReadError(String, String),

    #[error("Other storage error: {0}")]
    Other(#[from] anyhow::Error),
}
