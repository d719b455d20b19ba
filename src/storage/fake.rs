use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::storage::error::StorageError;
use crate::storage::object_store::ObjectStore;

/// One recorded call to `put_object`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCall {
    pub key: String,
    pub data: Bytes,
    pub content_type: String,
    pub upsert: bool,
}

/// A fake in-memory implementation of the ObjectStore trait for testing.
/// Records every upload call and supports failure injection.
#[derive(Clone)]
pub struct FakeObjectStore {
    bucket: String,
    objects: Arc<Mutex<HashMap<String, Bytes>>>,
    uploads: Arc<Mutex<Vec<UploadCall>>>,
    fail_uploads: Arc<Mutex<bool>>,
}

impl FakeObjectStore {
    /// Create a new empty FakeObjectStore
    pub fn new(bucket: &str) -> Self {
        FakeObjectStore {
            bucket: bucket.to_string(),
            objects: Arc::new(Mutex::new(HashMap::new())),
            uploads: Arc::new(Mutex::new(Vec::new())),
            fail_uploads: Arc::new(Mutex::new(false)),
        }
    }

    /// Make every subsequent upload fail
    pub async fn fake_fail_uploads(&self) {
        *self.fail_uploads.lock().await = true;
    }

    /// Every upload call made against this store, in call order
    pub async fn uploads(&self) -> Vec<UploadCall> {
        self.uploads.lock().await.clone()
    }

    /// Seed an object without recording an upload call
    pub async fn fake_add_object(&self, key: &str, data: Bytes) {
        let mut objects = self.objects.lock().await;
        objects.insert(key.to_string(), data);
    }
}

#[async_trait]
impl ObjectStore for FakeObjectStore {
    async fn put_object(
        &self,
        key: &str,
        data: Bytes,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), StorageError> {
        self.uploads.lock().await.push(UploadCall {
            key: key.to_string(),
            data: data.clone(),
            content_type: content_type.to_string(),
            upsert,
        });

        if *self.fail_uploads.lock().await {
            return Err(StorageError::UploadError(
                key.to_string(),
                "injected failure".to_string(),
            ));
        }

        let mut objects = self.objects.lock().await;
        if !upsert && objects.contains_key(key) {
            return Err(StorageError::ObjectAlreadyExists(key.to_string()));
        }
        objects.insert(key.to_string(), data);
        Ok(())
    }

    async fn get_object(&self, key: &str) -> Result<Bytes, StorageError> {
        let objects = self.objects.lock().await;
        match objects.get(key) {
            Some(data) => Ok(data.clone()),
            None => Err(StorageError::ObjectNotFound(key.to_string())),
        }
    }

    async fn list_objects(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let objects = self.objects.lock().await;
        let mut keys: Vec<String> = objects
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://storage.local/{}/{}", self.bucket, key)
    }
}
