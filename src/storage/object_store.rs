use crate::storage::error::StorageError;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

/// ObjectStore trait defining the interface for the remote object storage surface
#[async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    /// Upload an object.
    ///
    /// * `key` - Destination key for the object
    /// * `data` - Object bytes
    /// * `content_type` - MIME type recorded with the object
    /// * `upsert` - When true an existing object at `key` is replaced;
    ///   when false an existing object is an error
    async fn put_object(
        &self,
        key: &str,
        data: Bytes,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), StorageError>;

    /// Download an object by its key
    async fn get_object(&self, key: &str) -> Result<Bytes, StorageError>;

    /// List object keys under a prefix
    async fn list_objects(&self, prefix: &str) -> Result<Vec<String>, StorageError>;

    /// Derive the public URL for an object at `key`.
    ///
    /// The URL is computable without contacting the store; nothing checks
    /// that an object actually exists there.
    fn public_url(&self, key: &str) -> String;
}

/// Implementation of ObjectStore trait for Arc<T> where T implements ObjectStore
///
/// This allows sharing store instances across threads and components efficiently.
#[async_trait]
impl<T: ObjectStore + ?Sized> ObjectStore for Arc<T> {
    async fn put_object(
        &self,
        key: &str,
        data: Bytes,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), StorageError> {
        (**self).put_object(key, data, content_type, upsert).await
    }

    async fn get_object(&self, key: &str) -> Result<Bytes, StorageError> {
        (**self).get_object(key).await
    }

    async fn list_objects(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        (**self).list_objects(prefix).await
    }

    fn public_url(&self, key: &str) -> String {
        (**self).public_url(key)
    }
}
