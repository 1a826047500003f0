use super::audio_storage_repository::{AudioStorageRepository, ObjectStat, StorageError};
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use std::path::Path;

const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";
const DURATION_METADATA_KEY: &str = "duration";

/// S3 implementation of the audio object store, pointed at a MinIO endpoint
pub struct S3AudioStorageRepository {
    client: S3Client,
    bucket: String,
    address: String,
    port: u16,
}

impl S3AudioStorageRepository {
    pub fn new(client: S3Client, bucket: String, address: String, port: u16) -> Self {
        Self {
            client,
            bucket,
            address,
            port,
        }
    }

    /// Anonymous-read bucket policy so object URLs work without signing
    fn public_read_policy(bucket: &str) -> String {
        serde_json::json!({
            "Version": "2012-10-17",
            "Statement": [
                {
                    "Effect": "Allow",
                    "Principal": "*",
                    "Action": "s3:GetObject",
                    "Resource": format!("arn:aws:s3:::{}/*", bucket),
                },
            ],
        })
        .to_string()
    }
}

#[async_trait]
impl AudioStorageRepository for S3AudioStorageRepository {
    async fn ensure_bucket(&self) -> Result<(), StorageError> {
        // An already-existing bucket fails creation; that is fine here
        if let Err(e) = self
            .client
            .create_bucket()
            .bucket(&self.bucket)
            .send()
            .await
        {
            tracing::debug!(
                error = ?e,
                bucket = %self.bucket,
                "create_bucket skipped"
            );
        }

        self.client
            .put_bucket_policy()
            .bucket(&self.bucket)
            .policy(Self::public_read_policy(&self.bucket))
            .send()
            .await
            .map_err(|e| {
                StorageError::Backend(format!("failed to set bucket policy: {:?}", e))
            })?;

        tracing::info!(bucket = %self.bucket, "bucket ready with public-read policy");

        Ok(())
    }

    async fn stat(&self, file_name: &str) -> Result<ObjectStat, StorageError> {
        let head = self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(file_name)
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_not_found() {
                    StorageError::NotFound(file_name.to_string())
                } else {
                    StorageError::Backend(format!("head_object failed: {:?}", service_error))
                }
            })?;

        let duration = head
            .metadata()
            .and_then(|m| m.get(DURATION_METADATA_KEY))
            .cloned();

        Ok(ObjectStat { duration })
    }

    async fn upload(
        &self,
        file_name: &str,
        path: &Path,
        duration_seconds: f64,
    ) -> Result<(), StorageError> {
        let body = ByteStream::from_path(path).await.map_err(|e| {
            StorageError::Backend(format!("failed to read {}: {}", path.display(), e))
        })?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(file_name)
            .body(body)
            .content_type(AUDIO_CONTENT_TYPE)
            .metadata(DURATION_METADATA_KEY, duration_seconds.to_string())
            .send()
            .await
            .map_err(|e| StorageError::Backend(format!("put_object failed: {:?}", e)))?;

        tracing::debug!(file_name = %file_name, "audio object uploaded");

        Ok(())
    }

    fn public_url(&self, file_name: &str) -> String {
        format!(
            "http://{}:{}/{}/{}",
            self.address, self.port, self.bucket, file_name
        )
    }
}
