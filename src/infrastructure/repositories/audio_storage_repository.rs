use async_trait::async_trait;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("storage backend: {0}")]
    Backend(String),
}

/// Metadata recorded for a stored audio object.
#[derive(Debug, Clone)]
pub struct ObjectStat {
    /// Stringified duration in seconds, as attached at upload time.
    /// `None` when the object predates the metadata or it was lost.
    pub duration: Option<String>,
}

/// Object store holding the synthesized MP3s.
/// Abstracts the S3-compatible backend so tests can substitute fakes.
#[async_trait]
pub trait AudioStorageRepository: Send + Sync {
    /// Create the bucket if needed and make it publicly readable
    ///
    /// Creation of an already-existing bucket is not an error; failing to
    /// apply the public-read policy is.
    async fn ensure_bucket(&self) -> Result<(), StorageError>;

    /// Look up an object's metadata without fetching its bytes
    ///
    /// # Errors
    /// `StorageError::NotFound` when the object does not exist
    async fn stat(&self, file_name: &str) -> Result<ObjectStat, StorageError>;

    /// Upload the file at `path` under `file_name`, attaching the audio
    /// content-type and the duration as object metadata
    async fn upload(
        &self,
        file_name: &str,
        path: &Path,
        duration_seconds: f64,
    ) -> Result<(), StorageError>;

    /// Public URL callers can fetch the object from
    fn public_url(&self, file_name: &str) -> String;
}
