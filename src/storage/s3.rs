use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sdk_s3::{config::Region, Client};
use bytes::Bytes;
use tracing::{debug, info};

use crate::config::StorageConfig;
use crate::storage::error::StorageError;
use crate::storage::object_store::ObjectStore;

/// S3-compatible implementation of the ObjectStore trait
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    region: String,
    public_url_base: Option<String>,
}

impl S3ObjectStore {
    /// Create a new S3ObjectStore instance from configuration
    pub async fn new(config: &StorageConfig) -> Result<Self, StorageError> {
        info!(
            "Creating S3ObjectStore: endpoint={:?}, region={}, bucket={}",
            config.endpoint, config.region, config.bucket
        );

        let mut s3_config_builder = aws_sdk_s3::config::Builder::new()
            .region(Region::new(config.region.clone()))
            .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
            .force_path_style(true); // MinIO requires path-style requests

        if let (Some(access_key), Some(secret_key)) =
            (&config.access_key_id, &config.secret_access_key)
        {
            let credentials = Credentials::new(
                access_key,
                secret_key,
                None,
                None,
                "StaticCredentialsProvider",
            );

            s3_config_builder = s3_config_builder.credentials_provider(credentials);
        }

        if let Some(endpoint) = &config.endpoint {
            info!("Setting custom endpoint: {}", endpoint);
            s3_config_builder = s3_config_builder.endpoint_url(endpoint);
        }

        let s3_config = s3_config_builder.build();
        let client = Client::from_conf(s3_config);

        info!("Created S3 client for region {}", config.region);

        Ok(Self {
            client,
            bucket: config.bucket.clone(),
            region: config.region.clone(),
            public_url_base: config.public_url_base.clone(),
        })
    }

    /// Check whether an object already exists at `key`
    async fn object_exists(&self, key: &str) -> Result<bool, StorageError> {
        let result = self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(e) => {
                if let aws_sdk_s3::error::SdkError::ServiceError(ref service_err) = e {
                    if service_err.err().is_not_found() {
                        return Ok(false);
                    }
                }

                let error_str = e.to_string();
                if error_str.contains("NotFound") || error_str.contains("404") {
                    Ok(false)
                } else {
                    Err(StorageError::ReadError(key.to_string(), error_str))
                }
            }
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(
        &self,
        key: &str,
        data: Bytes,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), StorageError> {
        if !upsert && self.object_exists(key).await? {
            return Err(StorageError::ObjectAlreadyExists(key.to_string()));
        }

        debug!("Uploading object to S3: {} ({} bytes)", key, data.len());

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(data.into())
            .send()
            .await
            .map_err(|e| {
                let error_str = e.to_string();
                if error_str.contains("AccessDenied") {
                    StorageError::AccessDenied(key.to_string(), error_str)
                } else {
                    StorageError::UploadError(key.to_string(), error_str)
                }
            })?;

        debug!("Successfully uploaded object to S3: {}", key);
        Ok(())
    }

    async fn get_object(&self, key: &str) -> Result<Bytes, StorageError> {
        debug!("Fetching object from S3: {}", key);

        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                // Extract the specific error type from service errors
                if let aws_sdk_s3::error::SdkError::ServiceError(ref service_err) = e {
                    if let Some(code) = service_err.err().meta().code() {
                        match code {
                            "NoSuchKey" | "KeyNotFound" => {
                                return StorageError::ObjectNotFound(key.to_string());
                            }
                            "AccessDenied" => {
                                return StorageError::AccessDenied(key.to_string(), e.to_string());
                            }
                            _ => {}
                        }
                    }
                }

                // Fallback to string matching for other cases
                let error_str = e.to_string();
                if error_str.contains("NoSuchKey")
                    || error_str.contains("KeyNotFound")
                    || error_str.contains("404")
                    || error_str.contains("Not Found")
                {
                    StorageError::ObjectNotFound(key.to_string())
                } else if error_str.contains("AccessDenied") {
                    StorageError::AccessDenied(key.to_string(), error_str)
                } else {
                    StorageError::ReadError(key.to_string(), error_str)
                }
            })?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| StorageError::ReadError(key.to_string(), e.to_string()))?
            .into_bytes();

        debug!("Successfully fetched object from S3: {}", key);
        Ok(data)
    }

    async fn list_objects(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        debug!("Listing objects with prefix: {}", prefix);

        let response = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .send()
            .await
            .map_err(|e| StorageError::ReadError(prefix.to_string(), e.to_string()))?;

        let keys = response
            .contents()
            .iter()
            .filter_map(|obj| obj.key().map(String::from))
            .collect();

        Ok(keys)
    }

    fn public_url(&self, key: &str) -> String {
        match &self.public_url_base {
            Some(base) => format!("{}/{}/{}", base.trim_end_matches('/'), self.bucket, key),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, key
            ),
        }
    }
}
