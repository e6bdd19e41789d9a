// Infrastructure error conversions
pub mod error;

// Storage implementations
pub mod in_memory_gateway;
pub mod provisioner;
pub mod s3_gateway;

// Re-export key types
pub use in_memory_gateway::InMemoryStorageGateway;
pub use provisioner::{BucketProvisioner, ProvisionError, S3BucketProvisioner};
pub use s3_gateway::S3StorageGateway;
