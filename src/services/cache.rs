use moka::future::Cache;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Cache failures; callers log them and fall back to the database
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache miss: {0}")]
    CacheMiss(String),
}

/// Two-tier JSON cache
///
/// Reads go to the in-process moka map first and fall back to Redis, which
/// is shared by every instance. Entries in both tiers share one TTL.
pub struct CacheManager {
    redis: ConnectionManager,
    local: Cache<String, Arc<str>>,
    ttl_secs: u64,
}

impl CacheManager {
    pub async fn new(redis_url: &str, l1_size: u64, ttl_secs: u64) -> Result<Self, CacheError> {
        let client = redis::Client::open(redis_url)?;
        let redis = ConnectionManager::new(client).await?;

        let local = Cache::builder()
            .max_capacity(l1_size)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Ok(Self { redis, local, ttl_secs })
    }

    /// Look up `key`, returning `CacheError::CacheMiss` when neither tier has it
    pub async fn get<T>(&self, key: &str) -> Result<T, CacheError>
    where
        T: DeserializeOwned,
    {
        if let Some(json) = self.local.get(key).await {
            return Ok(serde_json::from_str(&json)?);
        }

        let mut conn = self.redis.clone();
        let Some(json) = conn.get::<_, Option<String>>(key).await? else {
            tracing::trace!("Cache miss: {}", key);
            return Err(CacheError::CacheMiss(key.to_string()));
        };

        let value = serde_json::from_str(&json)?;
        self.local.insert(key.to_string(), Arc::from(json)).await;
        Ok(value)
    }

    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let json = serde_json::to_string(value)?;

        let mut conn = self.redis.clone();
        conn.set_ex::<_, _, ()>(key, &json, self.ttl_secs).await?;
        self.local.insert(key.to_string(), Arc::from(json)).await;

        Ok(())
    }

    /// Remove `key` from both tiers
    pub async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.local.invalidate(key).await;

        let mut conn = self.redis.clone();
        conn.del::<_, ()>(key).await?;
        Ok(())
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Most common skills across all profiles
    pub fn popular_skills() -> String {
        "skills:popular".to_string()
    }

    /// Hackathon listing used for recommendations
    pub fn hackathon(hackathon_id: i64) -> String {
        format!("hackathon:{}", hackathon_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillFrequency;

    #[tokio::test]
    #[ignore = "Requires Redis"]
    async fn test_cache_set_get() {
        let cache = CacheManager::new("redis://127.0.0.1:6379", 1000, 60)
            .await
            .expect("Failed to create cache");

        let key = "test:popular";
        let value = vec![SkillFrequency { skill: "Rust".to_string(), count: 3 }];

        cache.set(key, &value).await.unwrap();
        let result: Vec<SkillFrequency> = cache.get(key).await.unwrap();
        assert_eq!(result, value);

        cache.delete(key).await.unwrap();
        assert!(cache.get::<Vec<SkillFrequency>>(key).await.is_err());
    }

    #[test]
    fn test_cache_key_builder() {
        assert_eq!(CacheKey::popular_skills(), "skills:popular");
        assert_eq!(CacheKey::hackathon(42), "hackathon:42");
    }
}
