use async_trait::async_trait;

/// Cache errors
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Connection or command error against the cache backend
    #[error("cache backend: {0}")]
    Backend(String),
}

/// Key-value store memoizing (text, voice) fingerprints to object file names.
///
/// Entries have no expiry; a stale entry is detected and deleted when the
/// object it references no longer exists.
#[async_trait]
pub trait CacheRepository: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Liveness check backing the readiness endpoint
    async fn ping(&self) -> Result<(), CacheError>;
}
