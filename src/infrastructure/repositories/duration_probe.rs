use async_trait::async_trait;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("failed to spawn probe: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("probe exited with code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },
    #[error("probe printed a non-numeric duration: {0:?}")]
    InvalidDuration(String),
}

/// Capability to measure the playable duration of a local media file.
#[async_trait]
pub trait DurationProbe: Send + Sync {
    /// Duration of the file at `path`, in seconds
    async fn duration_seconds(&self, path: &Path) -> Result<f64, ProbeError>;
}
