pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    // Value objects
    BucketName,
    DomainValidationError,
    // Models
    GalleryEntry,
    ImageExtension,
    ObjectKey,
    // Errors
    StoreError,
    StoredImage,
    UploadCandidate,
    UploadOutcome,
    UploadSummary,
    UploadValidationError,
};

// Port types - interfaces for external systems
pub use ports::{StorageGateway, DEFAULT_PRESIGN_TTL};

// Service implementations - business logic
pub use services::{GalleryLister, ObjectNamer, UploadPipeline, UploadValidator};

// Application factory and configuration
pub use app::{
    create_in_memory_app, create_minio_app, AppBuilder, AppConfig, AppError, GalleryServices,
    StorageBackend,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::storage::{
    BucketProvisioner, InMemoryStorageGateway, ProvisionError, S3BucketProvisioner,
    S3StorageGateway,
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        create_in_memory_app, create_minio_app, AppBuilder, BucketName, GalleryLister,
        GalleryServices, ImageExtension, InMemoryStorageGateway, ObjectKey, S3StorageGateway,
        StorageGateway, UploadCandidate, UploadPipeline, UploadSummary,
    };
}
