//! Redis-backed cache for LLM replies.
//!
//! Failures are logged and treated as misses; the cache never fails a call.

use redis::AsyncCommands;
use tracing::warn;
use uuid::Uuid;

/// Replies are reused for one hour.
pub const DEFAULT_TTL_SECS: u64 = 3600;

#[derive(Clone)]
pub struct ResponseCache {
    client: redis::Client,
    ttl_secs: u64,
}

impl ResponseCache {
    pub fn new(client: redis::Client, ttl_secs: u64) -> Self {
        Self { client, ttl_secs }
    }

    /// Deterministic key for a model + prompt parts.
    pub fn key_for(model: &str, parts: &[&str]) -> String {
        // Unit separator keeps ["ab", "c"] and ["a", "bc"] apart
        let joined = parts.join("\u{1f}");
        let digest = Uuid::new_v5(&Uuid::NAMESPACE_OID, joined.as_bytes());
        format!("llm:{model}:{digest}")
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        match self.try_get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!("LLM cache read failed for {key}: {e}");
                None
            }
        }
    }

    pub async fn put(&self, key: &str, value: &str) {
        if let Err(e) = self.try_put(key, value).await {
            warn!("LLM cache write failed for {key}: {e}");
        }
    }

    async fn try_get(&self, key: &str) -> redis::RedisResult<Option<String>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.get(key).await
    }

    async fn try_put(&self, key: &str, value: &str) -> redis::RedisResult<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set_ex(key, value, self.ttl_secs).await
    }
}
