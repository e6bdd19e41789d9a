use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

use crate::domain::{errors::StoreResult, models::StoredImage, value_objects::ObjectKey};

/// Default validity of issued read links: 7 days from issuance
pub const DEFAULT_PRESIGN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Port over the object-store primitives the gallery needs.
///
/// One gateway is constructed at startup and shared by reference across
/// all in-flight requests; every call is stateless, so no coordination is
/// required between concurrent callers.
#[async_trait]
pub trait StorageGateway: Send + Sync + 'static {
    /// Store object bytes under the given key with the given content type
    async fn put(&self, key: &ObjectKey, data: Bytes, content_type: &str) -> StoreResult<()>;

    /// All objects currently in the bucket.
    ///
    /// Reflects the store's current (possibly eventually-consistent) view;
    /// no ordering is guaranteed. Ordering is imposed downstream.
    async fn list(&self) -> StoreResult<Vec<StoredImage>>;

    /// Time-limited GET URL for one object
    async fn presign(&self, key: &ObjectKey, ttl: Duration) -> StoreResult<String>;
}
