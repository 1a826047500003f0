use crate::error::AppError;
use crate::infrastructure::repositories::{ProbeError, ProviderError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("synthesis session id is missing or empty")]
    MissingSessionId,
    #[error("upstream synthesis failed: {0}")]
    Provider(#[from] ProviderError),
    #[error("duration probe failed: {0}")]
    Probe(#[from] ProbeError),
    #[error("audio storage failed: {0}")]
    Storage(#[from] StorageError),
    #[error("temp file error: {0}")]
    TempFile(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        // Detailed failure context is logged where it happens; callers only
        // get a generic message per error class.
        match err {
            TtsServiceError::MissingSessionId => {
                AppError::Configuration("Missing TikTok session id".to_string())
            }
            TtsServiceError::Provider(_) => {
                AppError::ExternalService("An error occurred while synthesizing speech".to_string())
            }
            TtsServiceError::Probe(_) | TtsServiceError::Storage(_) | TtsServiceError::TempFile(_) => {
                AppError::Storage("An error occurred while storing audio".to_string())
            }
            TtsServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
