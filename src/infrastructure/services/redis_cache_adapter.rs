use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde_json::Value;

use crate::application::ports::cache_ports::CachePort;
use crate::infrastructure::services::cache_codec;

/// Keys requested per `SCAN` round trip during bulk deletes
const SCAN_BATCH_SIZE: usize = 100;

/// Cache port backed by Redis.
///
/// Every operation is fail-soft: errors are logged and the call degrades to
/// a miss or a no-op, so a Redis outage only costs extra database reads.
#[derive(Clone)]
pub struct RedisCacheAdapter {
    connection: ConnectionManager,
}

impl RedisCacheAdapter {
    /// Opens a managed connection, which reconnects on its own afterwards
    pub async fn connect(redis_url: &str) -> redis::RedisResult<Self> {
        let client = redis::Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;
        tracing::info!("Connected to Redis cache");
        Ok(Self { connection })
    }

    /// Checks that the backend answers; used once at startup
    pub async fn ping(&self) -> bool {
        let mut conn = self.connection.clone();
        let reply: redis::RedisResult<String> = redis::cmd("PING").query_async(&mut conn).await;
        match reply {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Redis PING failed: {}", e);
                false
            }
        }
    }

    async fn try_get(&self, key: &str) -> Result<Option<Value>, String> {
        let mut conn = self.connection.clone();
        let raw: Option<String> = conn.get(key).await.map_err(|e| e.to_string())?;
        match raw {
            Some(text) => cache_codec::decode(&text).map(Some).map_err(|e| e.to_string()),
            None => Ok(None),
        }
    }

    async fn try_set(&self, key: &str, value: &Value, ttl_seconds: u64) -> Result<(), String> {
        let payload = cache_codec::encode(value).map_err(|e| e.to_string())?;
        let mut conn = self.connection.clone();
        let _: () = conn.set_ex(key, payload, ttl_seconds).await.map_err(|e| e.to_string())?;
        Ok(())
    }

    async fn try_delete_by_pattern(&self, pattern: &str) -> Result<usize, String> {
        let mut conn = self.connection.clone();
        let mut cursor: u64 = 0;
        let mut removed = 0;

        loop {
            let (next, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .cursor_arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH_SIZE)
                .query_async(&mut conn)
                .await
                .map_err(|e| e.to_string())?;

            if !keys.is_empty() {
                let deleted: usize = conn.del(&keys).await.map_err(|e| e.to_string())?;
                removed += deleted;
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }

        Ok(removed)
    }
}

#[async_trait]
impl CachePort for RedisCacheAdapter {
    async fn get(&self, key: &str) -> Option<Value> {
        match self.try_get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Cache read failed for {}, falling back to store: {}", key, e);
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &Value, ttl_seconds: u64) {
        if let Err(e) = self.try_set(key, value, ttl_seconds).await {
            tracing::warn!("Cache write failed for {}: {}", key, e);
        }
    }

    async fn delete(&self, key: &str) {
        let mut conn = self.connection.clone();
        let result: redis::RedisResult<usize> = conn.del(key).await;
        if let Err(e) = result {
            tracing::warn!("Cache delete failed for {}: {}", key, e);
        }
    }

    async fn delete_by_prefix(&self, pattern: &str) {
        match self.try_delete_by_pattern(pattern).await {
            Ok(removed) => tracing::debug!("Removed {} cache keys matching {}", removed, pattern),
            Err(e) => tracing::warn!("Cache bulk delete failed for {}: {}", pattern, e),
        }
    }
}
