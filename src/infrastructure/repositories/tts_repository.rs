use crate::domain::tts::Voice;
use async_trait::async_trait;

/// Failure modes of the upstream synthesis provider.
///
/// The provider reports errors through a `status_code` field in an otherwise
/// successful HTTP response; each known code gets its own variant so logs
/// stay diagnosable even though callers only see a generic failure.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("session id is invalid or expired (status_code 1)")]
    InvalidSessionId,
    #[error("the provided text is too long (status_code 2)")]
    TextTooLong,
    #[error("invalid speaker (status_code 4)")]
    InvalidSpeaker,
    #[error("no session id found (status_code 5)")]
    NoSessionId,
    #[error("unknown provider error (status_code {0})")]
    Unknown(i64),
    #[error("response carried no audio payload")]
    MissingPayload,
    #[error("audio payload is not valid base64: {0}")]
    InvalidPayload(#[from] base64::DecodeError),
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Repository for speech synthesis.
/// Abstracts the upstream provider so tests can substitute fakes.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize `text` with `voice`, returning decoded MP3 bytes
    ///
    /// # Arguments
    /// * `text` - The raw text to synthesize
    /// * `voice` - The speaker to use
    /// * `session_id` - Upstream authentication credential
    async fn synthesize(
        &self,
        text: &str,
        voice: Voice,
        session_id: &str,
    ) -> Result<Vec<u8>, ProviderError>;
}
