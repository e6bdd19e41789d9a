use std::sync::Arc;

use crate::{
    adapters::outbound::storage::{
        BucketProvisioner, InMemoryStorageGateway, ProvisionError, S3BucketProvisioner,
        S3StorageGateway,
    },
    domain::value_objects::BucketName,
    ports::storage::StorageGateway,
    services::{GalleryLister, UploadPipeline},
};

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::InMemory {
                bucket: "gallery".to_string(),
            },
        }
    }
}

/// Storage backend configuration
#[derive(Debug, Clone)]
pub enum StorageBackend {
    InMemory {
        bucket: String,
    },
    Minio {
        endpoint: String,
        bucket: String,
        access_key: String,
        secret_key: String,
        use_ssl: bool,
    },
}

/// Application services container
pub struct GalleryServices {
    pub pipeline: UploadPipeline,
    pub lister: GalleryLister,
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure storage backend
    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.config.storage_backend = backend;
        self
    }

    /// Build the complete application with services.
    ///
    /// For network-backed storage this also ensures the target bucket
    /// exists; a provisioning failure aborts startup.
    pub async fn build(self) -> Result<GalleryServices, AppError> {
        let gateway = self.create_gateway().await?;

        Ok(GalleryServices {
            pipeline: UploadPipeline::new(gateway.clone()),
            lister: GalleryLister::new(gateway),
        })
    }

    /// Create the storage gateway based on configuration
    async fn create_gateway(&self) -> Result<Arc<dyn StorageGateway>, AppError> {
        match &self.config.storage_backend {
            StorageBackend::InMemory { bucket } => {
                let bucket = parse_bucket_name(bucket)?;
                Ok(Arc::new(InMemoryStorageGateway::new(bucket)))
            }
            StorageBackend::Minio {
                endpoint,
                bucket,
                access_key,
                secret_key,
                use_ssl,
            } => {
                let bucket = parse_bucket_name(bucket)?;

                let provisioner =
                    S3BucketProvisioner::new(endpoint, access_key, secret_key, *use_ssl)?;
                provisioner.ensure(&bucket).await?;

                let gateway =
                    S3StorageGateway::connect(endpoint, &bucket, access_key, secret_key, *use_ssl)
                        .map_err(|e| AppError::StorageInit {
                            message: e.to_string(),
                        })?;

                Ok(Arc::new(gateway))
            }
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_bucket_name(bucket: &str) -> Result<BucketName, AppError> {
    BucketName::new(bucket.to_string()).map_err(|e| AppError::Configuration {
        message: format!("Invalid bucket name: {}", e),
    })
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Bucket provisioning failed: {0}")]
    Provision(#[from] ProvisionError),

    #[error("Storage initialization error: {message}")]
    StorageInit { message: String },
}

/// Convenience functions for common configurations
///
/// Create an in-memory application for testing and development
pub async fn create_in_memory_app() -> Result<GalleryServices, AppError> {
    AppBuilder::new().build().await
}

/// Create a MinIO-backed application
pub async fn create_minio_app(
    endpoint: String,
    bucket: String,
    access_key: String,
    secret_key: String,
    use_ssl: bool,
) -> Result<GalleryServices, AppError> {
    AppBuilder::new()
        .with_storage_backend(StorageBackend::Minio {
            endpoint,
            bucket,
            access_key,
            secret_key,
            use_ssl,
        })
        .build()
        .await
}
