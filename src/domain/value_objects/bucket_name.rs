use crate::domain::errors::ValidationError;

/// A validated bucket name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketName(String);

impl BucketName {
    /// Create a new BucketName with S3-compatible validation rules
    pub fn new(value: String) -> Result<Self, ValidationError> {
        // Length validation
        if value.len() < 3 {
            return Err(ValidationError::BucketNameTooShort {
                actual: value.len(),
                min: 3,
            });
        }

        if value.len() > 63 {
            return Err(ValidationError::BucketNameTooLong {
                actual: value.len(),
                max: 63,
            });
        }

        // Must start and end with lowercase letter or number
        if !value
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(ValidationError::BucketNameInvalidStart);
        }

        if !value
            .chars()
            .last()
            .map_or(false, |c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(ValidationError::BucketNameInvalidEnd);
        }

        // Check for valid characters (lowercase, numbers, hyphens)
        for c in value.chars() {
            if !c.is_ascii_lowercase() && !c.is_ascii_digit() && c != '-' {
                return Err(ValidationError::BucketNameInvalidCharacter(c));
            }
        }

        // Cannot contain consecutive hyphens
        if value.contains("--") {
            return Err(ValidationError::BucketNameConsecutiveHyphens);
        }

        Ok(Self(value))
    }

    /// Get the bucket name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BucketName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bucket_name() {
        assert!(BucketName::new("gallery".to_string()).is_ok());
        assert!(BucketName::new("my-gallery-2024".to_string()).is_ok());
        assert!(BucketName::new("abc".to_string()).is_ok());
    }

    #[test]
    fn test_invalid_bucket_name() {
        assert!(BucketName::new("ab".to_string()).is_err());
        assert!(BucketName::new("a".repeat(64)).is_err());
        assert!(BucketName::new("-gallery".to_string()).is_err());
        assert!(BucketName::new("gallery-".to_string()).is_err());
        assert!(BucketName::new("Gallery".to_string()).is_err());
        assert!(BucketName::new("gal--lery".to_string()).is_err());
        assert!(BucketName::new("gal_lery".to_string()).is_err());
    }
}
