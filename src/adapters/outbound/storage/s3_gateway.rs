use async_trait::async_trait;
use bytes::Bytes;
use futures::TryStreamExt;
use http::Method;
use object_store::{
    aws::{AmazonS3, AmazonS3Builder},
    path::Path as ObjectPath,
    signer::Signer,
    Attribute, Attributes, ObjectStore as ObjectStoreBackend, PutOptions, PutPayload,
};
use std::{sync::Arc, time::Duration};
use tracing::warn;

use crate::{
    domain::{
        errors::{StoreError, StoreResult},
        models::StoredImage,
        value_objects::{BucketName, ObjectKey},
    },
    ports::storage::StorageGateway,
};

/// Gateway over an S3-compatible endpoint (MinIO, AWS S3).
///
/// Presigned URLs are derived with SigV4 query signing, so issuance is a
/// local computation against the configured credentials.
#[derive(Clone)]
pub struct S3StorageGateway {
    store: Arc<AmazonS3>,
}

impl S3StorageGateway {
    pub fn new(store: Arc<AmazonS3>) -> Self {
        Self { store }
    }

    /// Connect to an S3-compatible endpoint with explicit credentials
    pub fn connect(
        endpoint: &str,
        bucket: &BucketName,
        access_key: &str,
        secret_key: &str,
        use_ssl: bool,
    ) -> StoreResult<Self> {
        let scheme = if use_ssl { "https" } else { "http" };

        let store = AmazonS3Builder::new()
            .with_endpoint(format!("{}://{}", scheme, endpoint))
            .with_bucket_name(bucket.as_str())
            .with_access_key_id(access_key)
            .with_secret_access_key(secret_key)
            .with_region("us-east-1")
            .with_allow_http(!use_ssl)
            .build()
            .map_err(|e| StoreError::Backend {
                message: format!("Failed to configure S3 client: {}", e),
            })?;

        Ok(Self::new(Arc::new(store)))
    }

    fn to_object_path(key: &ObjectKey) -> ObjectPath {
        ObjectPath::from(key.as_str())
    }
}

#[async_trait]
impl StorageGateway for S3StorageGateway {
    async fn put(&self, key: &ObjectKey, data: Bytes, content_type: &str) -> StoreResult<()> {
        let path = Self::to_object_path(key);
        let payload = PutPayload::from(data);
        let attributes =
            Attributes::from_iter([(Attribute::ContentType, content_type.to_string())]);

        self.store
            .put_opts(&path, payload, PutOptions::from(attributes))
            .await?;

        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<StoredImage>> {
        let mut stream = self.store.list(None);
        let mut images = Vec::new();

        while let Some(meta) = stream.try_next().await? {
            // An unparsable key drops that one object, not the listing
            let key = match ObjectKey::new(meta.location.to_string()) {
                Ok(key) => key,
                Err(err) => {
                    warn!(location = %meta.location, error = %err, "skipping unlistable object");
                    continue;
                }
            };

            images.push(StoredImage {
                key,
                size: meta.size,
                last_modified: meta.last_modified,
            });
        }

        Ok(images)
    }

    async fn presign(&self, key: &ObjectKey, ttl: Duration) -> StoreResult<String> {
        let path = Self::to_object_path(key);

        let url = self
            .store
            .signed_url(Method::GET, &path, ttl)
            .await
            .map_err(|e| StoreError::Presign {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(url.to_string())
    }
}
