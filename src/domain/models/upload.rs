use bytes::Bytes;

use crate::domain::value_objects::ObjectKey;

/// One file in an inbound upload request.
///
/// Transient: lives only for the duration of request processing. The
/// filename is used for validation and error messages, never for storage
/// addressing.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    pub filename: String,
    pub data: Bytes,
}

impl UploadCandidate {
    pub fn new(filename: impl Into<String>, data: Bytes) -> Self {
        Self {
            filename: filename.into(),
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Per-candidate result of an upload attempt
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    /// The candidate was stored under the given key
    Uploaded { key: ObjectKey },
    /// The candidate was refused; the reason is human-readable
    Rejected { filename: String, reason: String },
}

impl UploadOutcome {
    pub fn is_uploaded(&self) -> bool {
        matches!(self, UploadOutcome::Uploaded { .. })
    }
}

/// Batch-level rollup of an ordered sequence of outcomes
#[derive(Debug, Clone, Default)]
pub struct UploadSummary {
    pub uploaded: usize,
    pub errors: Vec<String>,
}

impl UploadSummary {
    /// Summarize a complete outcome list, preserving input order.
    ///
    /// Error lines use the format `"<reason>: <original filename>"`.
    pub fn from_outcomes(outcomes: &[UploadOutcome]) -> Self {
        let mut summary = UploadSummary::default();
        for outcome in outcomes {
            match outcome {
                UploadOutcome::Uploaded { .. } => summary.uploaded += 1,
                UploadOutcome::Rejected { filename, reason } => {
                    summary.errors.push(format!("{}: {}", reason, filename));
                }
            }
        }
        summary
    }

    /// All error lines joined with `" | "`, or `None` when every file
    /// succeeded
    pub fn error_line(&self) -> Option<String> {
        if self.errors.is_empty() {
            None
        } else {
            Some(self.errors.join(" | "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_and_error_line() {
        let outcomes = vec![
            UploadOutcome::Uploaded {
                key: ObjectKey::new("uploads/a.png".to_string()).unwrap(),
            },
            UploadOutcome::Rejected {
                filename: "virus.exe".to_string(),
                reason: "Unsupported format".to_string(),
            },
            UploadOutcome::Rejected {
                filename: "empty.jpg".to_string(),
                reason: "Empty file".to_string(),
            },
        ];

        let summary = UploadSummary::from_outcomes(&outcomes);
        assert_eq!(summary.uploaded, 1);
        assert_eq!(
            summary.error_line().unwrap(),
            "Unsupported format: virus.exe | Empty file: empty.jpg"
        );
    }

    #[test]
    fn test_summary_without_errors() {
        let outcomes = vec![UploadOutcome::Uploaded {
            key: ObjectKey::new("uploads/a.png".to_string()).unwrap(),
        }];

        let summary = UploadSummary::from_outcomes(&outcomes);
        assert_eq!(summary.uploaded, 1);
        assert!(summary.error_line().is_none());
    }
}
