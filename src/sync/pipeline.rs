use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, info};

use crate::assets::models::Asset;
use crate::auth::session::Session;
use crate::db::database::Database;
use crate::db::models::{NewImage, SyncStatus};
use crate::optimize::error::OptimizeError;
use crate::optimize::metadata::{derive_metadata, ImageMetadata};
use crate::optimize::optimizer::ImageOptimizer;
use crate::storage::object_store::ObjectStore;
use crate::sync::error::SyncError;

/// Content type recorded with every uploaded object
const CONTENT_TYPE_JPEG: &str = "image/jpeg";

/// The outcome of a successful sync attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncedImage {
    /// Public URL of the uploaded object
    pub image_url: String,
    /// Metadata recorded with the row
    pub metadata: ImageMetadata,
    pub sync_status: SyncStatus,
}

/// Pipeline that uploads one optimized asset and records its metadata.
///
/// Each invocation is a single independent attempt: no state survives
/// between attempts and there is no cross-step transaction. An upload
/// that succeeds before a failed insert leaves an orphaned object behind.
pub struct SyncPipeline<A, O, S, D> {
    session: Arc<A>,
    optimizer: Arc<O>,
    object_store: Arc<S>,
    database: Arc<D>,
}

impl<A, O, S, D> SyncPipeline<A, O, S, D>
where
    A: Session,
    O: ImageOptimizer,
    S: ObjectStore,
    D: Database,
{
    /// Create a new pipeline with explicitly passed collaborators
    pub fn new(session: A, optimizer: O, object_store: S, database: D) -> Self {
        SyncPipeline {
            session: Arc::new(session),
            optimizer: Arc::new(optimizer),
            object_store: Arc::new(object_store),
            database: Arc::new(database),
        }
    }

    /// Sync one asset: optimize it, upload the result, and record a row.
    ///
    /// Steps run in order and the first failure aborts the rest.
    pub async fn sync_asset(&self, asset: &Asset) -> Result<SyncedImage, SyncError> {
        let user_id = self
            .session
            .current_user()
            .await
            .ok_or(SyncError::Unauthenticated)?;

        let metadata = derive_metadata(asset);
        let destination = destination_path(&user_id, &metadata);
        debug!("Syncing asset {} to {}", asset.filename, destination);

        let optimized = self.optimizer.optimize(&asset.uri).await?;

        let data = tokio::fs::read(&optimized.path)
            .await
            .map_err(OptimizeError::Io)?;

        self.object_store
            .put_object(&destination, Bytes::from(data), CONTENT_TYPE_JPEG, true)
            .await?;

        let image_url = self.object_store.public_url(&destination);
        debug!("Uploaded object available at {}", image_url);

        let row = NewImage {
            account_id: user_id,
            metadata: metadata.clone(),
            image_url: image_url.clone(),
            sync_status: SyncStatus::Synced,
        };
        self.database.insert_image(&row).await?;

        info!("Synced asset {} -> {}", asset.filename, image_url);

        Ok(SyncedImage {
            image_url,
            metadata,
            sync_status: SyncStatus::Synced,
        })
    }
}

/// Destination object key for a user's synced asset.
///
/// The stem is the asset's stable identifier, so re-syncing the same asset
/// targets the same key; the extension is always `jpeg` because the upload
/// is always the optimizer's JPEG output.
pub fn destination_path(user_id: &str, metadata: &ImageMetadata) -> String {
    format!("{}/{}.jpeg", user_id, metadata.unique_id)
}
