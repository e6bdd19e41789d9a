use thiserror::Error;

/// Per-file rejection reasons for inbound uploads.
///
/// These are recoverable: a rejected file becomes one line in the batch
/// result and never affects its siblings. The originating filename is
/// carried by the surrounding outcome, not by the error itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadValidationError {
    #[error("Unsupported format")]
    UnsupportedFormat,

    #[error("Empty file")]
    EmptyFile,
}
