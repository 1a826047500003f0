use super::cache_repository::{CacheError, CacheRepository};
use async_trait::async_trait;
use redis::AsyncCommands;

/// Redis implementation of the fingerprint cache
pub struct RedisCacheRepository {
    client: redis::Client,
}

impl RedisCacheRepository {
    /// Create a new cache client
    ///
    /// # Errors
    ///
    /// Returns an error if the Redis URL is invalid
    pub fn new(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)
            .map_err(|e| CacheError::Backend(format!("invalid URL: {e}")))?;

        Ok(Self { client })
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, CacheError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::Backend(format!("connection failed: {e}")))
    }
}

#[async_trait]
impl CacheRepository for RedisCacheRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection().await?;

        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| CacheError::Backend(format!("GET failed: {e}")))?;

        if value.is_some() {
            tracing::debug!(key, "cache hit");
        } else {
            tracing::debug!(key, "cache miss");
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;

        let _: () = conn
            .set(key, value)
            .await
            .map_err(|e| CacheError::Backend(format!("SET failed: {e}")))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;

        let _: () = conn
            .del(key)
            .await
            .map_err(|e| CacheError::Backend(format!("DEL failed: {e}")))?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;

        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| CacheError::Backend(format!("PING failed: {e}")))?;

        Ok(())
    }
}
