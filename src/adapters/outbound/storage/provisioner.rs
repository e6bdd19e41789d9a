use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::domain::value_objects::BucketName;

/// Errors that can occur while ensuring the target bucket exists
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Service error: {status_code} - {message}")]
    Service { status_code: u16, message: String },

    #[error("Unauthorized")]
    Unauthorized,
}

/// Startup-time bucket lifecycle management.
///
/// Runs once before the service accepts traffic; a failure here is fatal,
/// so there are no retries.
#[async_trait]
pub trait BucketProvisioner: Send + Sync {
    /// Check bucket existence and create it when absent. Idempotent.
    async fn ensure(&self, bucket: &BucketName) -> Result<(), ProvisionError>;
}

/// Provisioner talking to the S3 bucket API directly
pub struct S3BucketProvisioner {
    client: Client,
    endpoint: String,
    access_key: String,
    secret_key: String,
    secure: bool,
}

impl S3BucketProvisioner {
    pub fn new(
        endpoint: &str,
        access_key: &str,
        secret_key: &str,
        secure: bool,
    ) -> Result<Self, ProvisionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ProvisionError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
            secure,
        })
    }

    fn bucket_url(&self, bucket: &BucketName) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{}://{}/{}", scheme, self.endpoint, bucket)
    }

    async fn bucket_exists(&self, bucket: &BucketName) -> Result<bool, ProvisionError> {
        let response = self
            .client
            .head(self.bucket_url(bucket))
            .basic_auth(&self.access_key, Some(&self.secret_key))
            .send()
            .await
            .map_err(|e| ProvisionError::Transport(e.to_string()))?;

        let status = response.status();
        match status.as_u16() {
            404 => Ok(false),
            401 | 403 => Err(ProvisionError::Unauthorized),
            _ if status.is_success() => Ok(true),
            code => Err(ProvisionError::Service {
                status_code: code,
                message: format!("Unexpected response to bucket existence check: {}", status),
            }),
        }
    }

    async fn create_bucket(&self, bucket: &BucketName) -> Result<(), ProvisionError> {
        let response = self
            .client
            .put(self.bucket_url(bucket))
            .basic_auth(&self.access_key, Some(&self.secret_key))
            .send()
            .await
            .map_err(|e| ProvisionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // A concurrent creation by another process is fine
            if status.as_u16() == 409 {
                return Ok(());
            }
            if matches!(status.as_u16(), 401 | 403) {
                return Err(ProvisionError::Unauthorized);
            }
            let message = response.text().await.unwrap_or_default();
            return Err(ProvisionError::Service {
                status_code: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl BucketProvisioner for S3BucketProvisioner {
    async fn ensure(&self, bucket: &BucketName) -> Result<(), ProvisionError> {
        if self.bucket_exists(bucket).await? {
            return Ok(());
        }

        self.create_bucket(bucket).await?;
        info!(bucket = %bucket, "created bucket");

        Ok(())
    }
}
