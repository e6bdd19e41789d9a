use crate::domain::errors::StoreError;

/// Convert object_store errors to domain store errors
impl From<object_store::Error> for StoreError {
    fn from(err: object_store::Error) -> Self {
        match err {
            object_store::Error::NotFound { path, .. } => StoreError::NotFound { key: path },
            _ => StoreError::Backend {
                message: err.to_string(),
            },
        }
    }
}
