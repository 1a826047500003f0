use super::error::TtsServiceError;
use super::voice::Voice;
use crate::infrastructure::repositories::{
    AudioStorageRepository, CacheRepository, DurationProbe, TtsRepository,
};
use async_trait::async_trait;
use rand::RngCore;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where a synthesized clip ended up and how long it plays.
#[derive(Debug, Clone)]
pub struct TtsSynthesisOutcome {
    pub url: String,
    pub duration_seconds: f64,
}

pub struct TtsService {
    cache_repo: Arc<dyn CacheRepository>,
    storage_repo: Arc<dyn AudioStorageRepository>,
    tts_repo: Arc<dyn TtsRepository>,
    duration_probe: Arc<dyn DurationProbe>,
    session_id: Option<String>,
    temp_dir: PathBuf,
}

impl TtsService {
    pub fn new(
        cache_repo: Arc<dyn CacheRepository>,
        storage_repo: Arc<dyn AudioStorageRepository>,
        tts_repo: Arc<dyn TtsRepository>,
        duration_probe: Arc<dyn DurationProbe>,
        session_id: Option<String>,
        temp_dir: PathBuf,
    ) -> Self {
        Self {
            cache_repo,
            storage_repo,
            tts_repo,
            duration_probe,
            session_id,
            temp_dir,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Convert text to speech with the given voice
    ///
    /// This operation:
    /// - Reuses a previously synthesized object when the (text, voice)
    ///   fingerprint is cached and the object still exists
    /// - Otherwise calls the upstream provider, probes the clip duration,
    ///   uploads the MP3 and memoizes the fingerprint off the critical path
    ///
    /// Returns the object's public URL along with its duration in seconds
    async fn synthesize(&self, text: &str, voice: Voice)
        -> Result<TtsSynthesisOutcome, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        text: &str,
        voice: Voice,
    ) -> Result<TtsSynthesisOutcome, TtsServiceError> {
        let cache_key = fingerprint(text, voice);

        tracing::info!(
            voice = %voice,
            text_length = text.len(),
            cache_key = %cache_key,
            "TTS synthesis request"
        );

        // 1. Cache-hit short circuit
        if let Some(outcome) = self.try_cached(&cache_key).await {
            return Ok(outcome);
        }

        // 2. The upstream provider needs a session id from configuration
        let session_id = self
            .session_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(TtsServiceError::MissingSessionId)?;

        // 3. Synthesize
        let audio = self.tts_repo.synthesize(text, voice, session_id).await?;

        // 4. Stage the clip locally so the probe can read it
        let file_name = generate_file_name();
        let temp_path = self.write_temp_file(&file_name, &audio).await?;

        // 5. Probe duration; the temp file is removed on every exit path
        let duration_seconds = match self.duration_probe.duration_seconds(&temp_path).await {
            Ok(duration) => duration,
            Err(e) => {
                self.remove_temp_file(&temp_path).await;
                return Err(e.into());
            }
        };

        // 6. Upload with content-type and duration metadata
        if let Err(e) = self
            .storage_repo
            .upload(&file_name, &temp_path, duration_seconds)
            .await
        {
            self.remove_temp_file(&temp_path).await;
            return Err(e.into());
        }

        self.remove_temp_file(&temp_path).await;

        // 7. Memoize fingerprint -> file name; best-effort, the response
        //    does not wait for the cache write
        let cache_repo = self.cache_repo.clone();
        let key = cache_key.clone();
        let value = file_name.clone();
        tokio::spawn(async move {
            if let Err(e) = cache_repo.set(&key, &value).await {
                tracing::warn!(error = %e, cache_key = %key, "cache write failed");
            } else {
                tracing::debug!(cache_key = %key, file_name = %value, "fingerprint cached");
            }
        });

        tracing::info!(
            cache_key = %cache_key,
            file_name = %file_name,
            duration_seconds,
            audio_size = audio.len(),
            "TTS synthesis completed"
        );

        Ok(TtsSynthesisOutcome {
            url: self.storage_repo.public_url(&file_name),
            duration_seconds,
        })
    }
}

impl TtsService {
    /// Resolve the fingerprint against the cache and verify the object still
    /// exists. A cached name whose object is gone is deleted so the caller
    /// falls through to a fresh synthesis.
    async fn try_cached(&self, cache_key: &str) -> Option<TtsSynthesisOutcome> {
        let file_name = match self.cache_repo.get(cache_key).await {
            Ok(Some(file_name)) => file_name,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, cache_key = %cache_key, "cache lookup failed, treating as miss");
                return None;
            }
        };

        match self.storage_repo.stat(&file_name).await {
            Ok(stat) => {
                let duration_seconds = stat
                    .duration
                    .and_then(|d| d.parse::<f64>().ok())
                    .unwrap_or(-1.0);

                tracing::info!(
                    cache_key = %cache_key,
                    file_name = %file_name,
                    duration_seconds,
                    "TTS cache hit"
                );

                Some(TtsSynthesisOutcome {
                    url: self.storage_repo.public_url(&file_name),
                    duration_seconds,
                })
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    cache_key = %cache_key,
                    file_name = %file_name,
                    "cached object is gone, invalidating entry"
                );

                if let Err(e) = self.cache_repo.delete(cache_key).await {
                    tracing::warn!(error = %e, cache_key = %cache_key, "failed to delete stale cache entry");
                }

                None
            }
        }
    }

    async fn write_temp_file(
        &self,
        file_name: &str,
        audio: &[u8],
    ) -> Result<PathBuf, TtsServiceError> {
        tokio::fs::create_dir_all(&self.temp_dir).await?;
        let path = self.temp_dir.join(file_name);
        tokio::fs::write(&path, audio).await?;
        Ok(path)
    }

    async fn remove_temp_file(&self, path: &Path) {
        if let Err(e) = tokio::fs::remove_file(path).await {
            tracing::warn!(error = %e, path = %path.display(), "failed to remove temp file");
        }
    }
}

/// Deterministic cache key for a (text, voice) pair.
pub fn fingerprint(text: &str, voice: Voice) -> String {
    format!("{:x}", md5::compute(format!("{}-{}", text, voice.as_str())))
}

/// High-entropy object name so concurrent requests never collide.
fn generate_file_name() -> String {
    let mut bytes = [0u8; 24];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("{}.mp3", hex::encode(bytes))
}
