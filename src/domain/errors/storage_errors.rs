use thiserror::Error;

/// Errors raised by calls against the object store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Object not found: {key}")]
    NotFound { key: String },

    #[error("Failed to presign {key}: {message}")]
    Presign { key: String, message: String },

    #[error("Store backend error: {message}")]
    Backend { message: String },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
