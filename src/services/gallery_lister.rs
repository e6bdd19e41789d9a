use std::{sync::Arc, time::Duration};
use tracing::warn;

use crate::{
    domain::{errors::StoreResult, models::GalleryEntry},
    ports::storage::{StorageGateway, DEFAULT_PRESIGN_TTL},
};

/// Assembles the gallery view from the store's current contents.
///
/// Objects without a recognized image extension are discarded; surviving
/// entries are presigned and sorted lexicographically ascending by key so
/// repeated calls render identically even though the store guarantees no
/// ordering.
pub struct GalleryLister {
    gateway: Arc<dyn StorageGateway>,
    presign_ttl: Duration,
}

impl GalleryLister {
    pub fn new(gateway: Arc<dyn StorageGateway>) -> Self {
        Self {
            gateway,
            presign_ttl: DEFAULT_PRESIGN_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.presign_ttl = ttl;
        self
    }

    /// List all stored images as gallery entries, sorted ascending by key.
    ///
    /// A presign failure drops that single entry from the view; only a
    /// failed list call fails the whole request.
    pub async fn list(&self) -> StoreResult<Vec<GalleryEntry>> {
        let mut entries = Vec::new();

        for image in self.gateway.list().await? {
            if !image.key.has_image_extension() {
                continue;
            }

            let url = match self.gateway.presign(&image.key, self.presign_ttl).await {
                Ok(url) => url,
                Err(err) => {
                    warn!(key = %image.key, error = %err, "skipping gallery entry");
                    continue;
                }
            };

            entries.push(GalleryEntry {
                key: image.key,
                url,
                size: image.size,
            });
        }

        entries.sort_by(|a, b| a.key.as_str().cmp(b.key.as_str()));

        Ok(entries)
    }
}
