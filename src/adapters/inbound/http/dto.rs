use serde::{Deserialize, Serialize};

use crate::domain::models::{GalleryEntry, UploadSummary};

/// DTO for a single gallery image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryEntryDto {
    pub name: String,
    pub url: String,
    pub size: u64,
}

impl From<GalleryEntry> for GalleryEntryDto {
    fn from(entry: GalleryEntry) -> Self {
        Self {
            name: entry.key.to_string(),
            url: entry.url,
            size: entry.size,
        }
    }
}

/// DTO for the gallery listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryResponseDto {
    pub images: Vec<GalleryEntryDto>,
    pub total_count: usize,
}

impl GalleryResponseDto {
    pub fn new(entries: Vec<GalleryEntry>) -> Self {
        let images: Vec<GalleryEntryDto> = entries.into_iter().map(Into::into).collect();
        let total_count = images.len();
        Self {
            images,
            total_count,
        }
    }
}

/// DTO for the upload response
///
/// `errors` is a single pipe-joined line of `<reason>: <filename>`
/// entries, omitted entirely when every file went through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponseDto {
    pub uploaded: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

impl From<UploadSummary> for UploadResponseDto {
    fn from(summary: UploadSummary) -> Self {
        Self {
            errors: summary.error_line(),
            uploaded: summary.uploaded,
        }
    }
}

/// DTO for error responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
}

impl ErrorResponseDto {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}
