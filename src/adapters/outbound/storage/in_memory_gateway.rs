use async_trait::async_trait;
use bytes::Bytes;
use futures::TryStreamExt;
use object_store::{
    memory::InMemory, path::Path as ObjectPath, Attribute, Attributes,
    ObjectStore as ObjectStoreBackend, PutOptions, PutPayload,
};
use std::{sync::Arc, time::Duration};
use tracing::warn;

use crate::{
    domain::{
        errors::StoreResult,
        models::StoredImage,
        value_objects::{BucketName, ObjectKey},
    },
    ports::storage::StorageGateway,
};

/// Gateway over object_store's in-memory backend.
///
/// Presigned URLs are fabricated with the requested expiry encoded as a
/// query parameter, so TTL handling can be asserted in tests without
/// signing credentials. Unlike the real signer, presigning here fails for
/// keys that do not exist.
pub struct InMemoryStorageGateway {
    store: Arc<InMemory>,
    bucket: BucketName,
}

impl InMemoryStorageGateway {
    pub fn new(bucket: BucketName) -> Self {
        Self::with_store(Arc::new(InMemory::new()), bucket)
    }

    /// Wrap an existing in-memory store, sharing it with other users
    pub fn with_store(store: Arc<InMemory>, bucket: BucketName) -> Self {
        Self { store, bucket }
    }
}

#[async_trait]
impl StorageGateway for InMemoryStorageGateway {
    async fn put(&self, key: &ObjectKey, data: Bytes, content_type: &str) -> StoreResult<()> {
        let path = ObjectPath::from(key.as_str());
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
        let path = ObjectPath::from(key.as_str());

        self.store.head(&path).await?;

        Ok(format!(
            "https://in-memory.localhost/{}/{}?X-Amz-Expires={}",
            self.bucket,
            key,
            ttl.as_secs()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StoreError;

    fn gateway() -> InMemoryStorageGateway {
        InMemoryStorageGateway::new(BucketName::new("gallery".to_string()).unwrap())
    }

    #[tokio::test]
    async fn test_put_then_list() {
        let gateway = gateway();
        let key = ObjectKey::new("uploads/test.png".to_string()).unwrap();
        let data = Bytes::from_static(b"fake png bytes");

        gateway.put(&key, data.clone(), "image/png").await.unwrap();

        let images = gateway.list().await.unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].key, key);
        assert_eq!(images[0].size, data.len() as u64);
    }

    #[tokio::test]
    async fn test_presign_encodes_ttl() {
        let gateway = gateway();
        let key = ObjectKey::new("uploads/test.png".to_string()).unwrap();

        gateway
            .put(&key, Bytes::from_static(b"x"), "image/png")
            .await
            .unwrap();

        let url = gateway
            .presign(&key, Duration::from_secs(60))
            .await
            .unwrap();
        assert!(url.contains("uploads/test.png"));
        assert!(url.contains("X-Amz-Expires=60"));
    }

    #[tokio::test]
    async fn test_list_skips_objects_with_unparsable_keys() {
        let store = Arc::new(InMemory::new());
        let gateway = InMemoryStorageGateway::with_store(
            store.clone(),
            BucketName::new("gallery".to_string()).unwrap(),
        );

        let good = ObjectKey::new("uploads/good.png".to_string()).unwrap();
        gateway
            .put(&good, Bytes::from_static(b"pixels"), "image/png")
            .await
            .unwrap();

        // Planted directly: a key this long fails domain validation
        let oversized = ObjectPath::from(format!("uploads/{}.png", "x".repeat(1100)));
        store
            .put(&oversized, PutPayload::from_static(b"junk"))
            .await
            .unwrap();

        let images = gateway.list().await.unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].key, good);
    }

    #[tokio::test]
    async fn test_presign_missing_key_fails() {
        let gateway = gateway();
        let key = ObjectKey::new("uploads/missing.png".to_string()).unwrap();

        let result = gateway.presign(&key, Duration::from_secs(60)).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }
}
