use chrono::{DateTime, Utc};

use crate::domain::value_objects::ObjectKey;

/// One persisted object as reported by the store.
///
/// Immutable once created; the creation time is assigned by the store.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub key: ObjectKey,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
}

/// Read-only projection of a [`StoredImage`] for listing output.
///
/// Recomputed on every list request; the presigned URL is only valid for
/// the TTL it was issued with.
#[derive(Debug, Clone)]
pub struct GalleryEntry {
    pub key: ObjectKey,
    pub url: String,
    pub size: u64,
}
