use thiserror::Error;

use crate::db::error::DatabaseError;
use crate::optimize::error::OptimizeError;
use crate::storage::error::StorageError;

/// Errors that can occur during a sync attempt.
///
/// Every failure aborts the remaining pipeline steps and reaches the
/// caller as a distinct variant, so callers can decide whether to retry
/// or surface it.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("No authenticated user")]
    Unauthenticated,

    #[error("Failed to optimize image: {0}")]
    Optimize(#[from] OptimizeError),

    #[error("Failed to upload image: {0}")]
    Upload(#[from] StorageError),

    #[error("Failed to record synced image: {0}")]
    Insert(#[from] DatabaseError),
}
