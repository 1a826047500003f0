// In-memory stand-ins for the external collaborators, injected through the
// repository traits the way the production clients are.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tiktok_tts_proxy::domain::tts::Voice;
use tiktok_tts_proxy::infrastructure::repositories::{
    AudioStorageRepository, CacheError, CacheRepository, DurationProbe, ObjectStat, ProbeError,
    ProviderError, StorageError, TtsRepository,
};

/// Fake Redis: a mutex-guarded map
#[derive(Default)]
pub struct InMemoryCacheRepository {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryCacheRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry, bypassing the async trait
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn get_sync(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl CacheRepository for InMemoryCacheRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.get_sync(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.insert(key, value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }
}

#[derive(Clone)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub duration: String,
}

/// Fake MinIO: records uploaded objects with their duration metadata
#[derive(Default)]
pub struct InMemoryAudioStorage {
    objects: Mutex<HashMap<String, StoredObject>>,
}

impl InMemoryAudioStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object(&self, file_name: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(file_name).cloned()
    }

    /// Seed an object, as if uploaded by an earlier request
    pub fn insert_object(&self, file_name: &str, bytes: Vec<u8>, duration: &str) {
        self.objects.lock().unwrap().insert(
            file_name.to_string(),
            StoredObject {
                bytes,
                duration: duration.to_string(),
            },
        );
    }

    pub fn file_names(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }
}

#[async_trait]
impl AudioStorageRepository for InMemoryAudioStorage {
    async fn ensure_bucket(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn stat(&self, file_name: &str) -> Result<ObjectStat, StorageError> {
        self.object(file_name)
            .map(|o| ObjectStat {
                duration: Some(o.duration),
            })
            .ok_or_else(|| StorageError::NotFound(file_name.to_string()))
    }

    async fn upload(
        &self,
        file_name: &str,
        path: &Path,
        duration_seconds: f64,
    ) -> Result<(), StorageError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| StorageError::Backend(format!("failed to read {}: {e}", path.display())))?;

        self.insert_object(file_name, bytes, &duration_seconds.to_string());
        Ok(())
    }

    fn public_url(&self, file_name: &str) -> String {
        format!("http://localhost:9000/tiktoktts/{file_name}")
    }
}

/// Fake TikTok endpoint: serves fixed bytes or a scripted failure, and
/// counts how often it was called
pub struct FakeTtsRepository {
    audio: Vec<u8>,
    fail_with_status: Option<i64>,
    calls: AtomicUsize,
}

impl FakeTtsRepository {
    pub fn succeeding(audio: Vec<u8>) -> Self {
        Self {
            audio,
            fail_with_status: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(status_code: i64) -> Self {
        Self {
            audio: Vec::new(),
            fail_with_status: Some(status_code),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TtsRepository for FakeTtsRepository {
    async fn synthesize(
        &self,
        _text: &str,
        _voice: Voice,
        _session_id: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.fail_with_status {
            Some(1) => Err(ProviderError::InvalidSessionId),
            Some(2) => Err(ProviderError::TextTooLong),
            Some(4) => Err(ProviderError::InvalidSpeaker),
            Some(5) => Err(ProviderError::NoSessionId),
            Some(code) => Err(ProviderError::Unknown(code)),
            None => Ok(self.audio.clone()),
        }
    }
}

/// Fake ffprobe: returns a fixed duration without spawning anything
pub struct FixedDurationProbe {
    pub duration: f64,
}

#[async_trait]
impl DurationProbe for FixedDurationProbe {
    async fn duration_seconds(&self, _path: &Path) -> Result<f64, ProbeError> {
        Ok(self.duration)
    }
}
