use crate::domain::{
    errors::UploadValidationError, models::UploadCandidate, value_objects::ImageExtension,
};

/// Per-file acceptance checks for inbound uploads.
///
/// A candidate is accepted when its filename carries a recognized image
/// extension and its payload is non-empty. Contents are never inspected
/// beyond the caller-supplied bytes; the aggregate request size cap is
/// enforced by the boundary layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct UploadValidator;

impl UploadValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate one candidate, returning its recognized extension on success
    pub fn validate(
        &self,
        candidate: &UploadCandidate,
    ) -> Result<ImageExtension, UploadValidationError> {
        let ext = ImageExtension::from_filename(&candidate.filename)
            .ok_or(UploadValidationError::UnsupportedFormat)?;

        if candidate.is_empty() {
            return Err(UploadValidationError::EmptyFile);
        }

        Ok(ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn candidate(name: &str, len: usize) -> UploadCandidate {
        UploadCandidate::new(name, Bytes::from(vec![0u8; len]))
    }

    #[test]
    fn test_accepts_whitelisted_extensions() {
        let validator = UploadValidator::new();

        assert_eq!(
            validator.validate(&candidate("cat.png", 10)).unwrap(),
            ImageExtension::Png
        );
        assert_eq!(
            validator.validate(&candidate("PHOTO.JPG", 10)).unwrap(),
            ImageExtension::Jpg
        );
    }

    #[test]
    fn test_rejects_unsupported_extension() {
        let validator = UploadValidator::new();

        assert_eq!(
            validator.validate(&candidate("virus.exe", 500)),
            Err(UploadValidationError::UnsupportedFormat)
        );
        assert_eq!(
            validator.validate(&candidate("no_extension", 500)),
            Err(UploadValidationError::UnsupportedFormat)
        );
    }

    #[test]
    fn test_rejects_empty_payload() {
        let validator = UploadValidator::new();

        assert_eq!(
            validator.validate(&candidate("empty.jpg", 0)),
            Err(UploadValidationError::EmptyFile)
        );
    }

    #[test]
    fn test_extension_check_runs_before_empty_check() {
        // An empty file with a bad extension reports the format problem
        let validator = UploadValidator::new();

        assert_eq!(
            validator.validate(&candidate("empty.exe", 0)),
            Err(UploadValidationError::UnsupportedFormat)
        );
    }
}
