use std::sync::Arc;
use tracing::error;

use crate::{
    domain::models::{UploadCandidate, UploadOutcome},
    ports::storage::StorageGateway,
    services::{ObjectNamer, UploadValidator},
};

/// Orchestrates validation, naming and storage for a batch of uploads.
///
/// Candidates are processed sequentially in input order and every
/// candidate yields exactly one outcome: a bad file is recorded and the
/// batch moves on, so the result list is always complete. The pipeline
/// itself never fails.
pub struct UploadPipeline {
    gateway: Arc<dyn StorageGateway>,
    validator: UploadValidator,
    namer: ObjectNamer,
}

impl UploadPipeline {
    pub fn new(gateway: Arc<dyn StorageGateway>) -> Self {
        Self {
            gateway,
            validator: UploadValidator::new(),
            namer: ObjectNamer::new(),
        }
    }

    /// Process a batch, returning one outcome per candidate in input order
    pub async fn process(&self, candidates: Vec<UploadCandidate>) -> Vec<UploadOutcome> {
        let mut outcomes = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            outcomes.push(self.process_one(candidate).await);
        }
        outcomes
    }

    async fn process_one(&self, candidate: UploadCandidate) -> UploadOutcome {
        let ext = match self.validator.validate(&candidate) {
            Ok(ext) => ext,
            Err(err) => {
                return UploadOutcome::Rejected {
                    filename: candidate.filename,
                    reason: err.to_string(),
                };
            }
        };

        let key = self.namer.name(ext);

        // Content type from the filename; the octet-stream fallback is
        // unreachable after validation but must not crash if reached.
        let content_type = mime_guess::from_path(&candidate.filename).first_or_octet_stream();

        let UploadCandidate { filename, data } = candidate;

        match self
            .gateway
            .put(&key, data, content_type.essence_str())
            .await
        {
            Ok(()) => UploadOutcome::Uploaded { key },
            Err(err) => {
                error!(filename = %filename, key = %key, error = %err, "upload failed");
                UploadOutcome::Rejected {
                    filename,
                    reason: err.to_string(),
                }
            }
        }
    }
}
