use crate::db::error::DatabaseError;
use crate::db::models::NewImage;
use async_trait::async_trait;
use std::sync::Arc;

/// Database trait defining the interface for recording synced images
#[async_trait]
pub trait Database: Send + Sync + 'static {
    /// Insert a row into the `images` collection.
    ///
    /// Inserts are never de-duplicated; syncing the same asset twice
    /// creates two rows.
    async fn insert_image(&self, image: &NewImage) -> Result<(), DatabaseError>;
}

/// Implementation of Database trait for Arc<T> where T implements Database
///
/// This allows sharing database instances across threads and components efficiently.
#[async_trait]
impl<T: Database + ?Sized> Database for Arc<T> {
    async fn insert_image(&self, image: &NewImage) -> Result<(), DatabaseError> {
        (**self).insert_image(image).await
    }
}
