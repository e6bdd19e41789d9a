use crate::domain::errors::ValidationError;
use crate::domain::value_objects::ImageExtension;

/// A validated object key (path) within the gallery bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Create a new ObjectKey with validation
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyObjectKey);
        }

        if value.len() > 1024 {
            return Err(ValidationError::ObjectKeyTooLong {
                actual: value.len(),
                max: 1024,
            });
        }

        // Check for invalid characters (null bytes)
        if value.contains('\0') {
            return Err(ValidationError::InvalidObjectKeyCharacter('\0'));
        }

        // Check for invalid patterns
        if value.starts_with('/') {
            return Err(ValidationError::ObjectKeyStartsWithSlash);
        }

        if value.contains("//") {
            return Err(ValidationError::ObjectKeyContainsDoubleSlash);
        }

        Ok(Self(value))
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the file name part of the key (everything after the last '/')
    pub fn file_name(&self) -> &str {
        self.0.rfind('/').map_or(&self.0, |idx| &self.0[idx + 1..])
    }

    /// Whether this key ends in a recognized image extension
    pub fn has_image_extension(&self) -> bool {
        ImageExtension::matches_key(&self.0)
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
