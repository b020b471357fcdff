use async_trait::async_trait;
use serde_json::Value;
use sourcewatch_domain::{CacheEntry, CacheStats, CacheWriteOptions};
use std::time::Duration;

/// Advisory key/value store with per-entry TTL and size accounting.
///
/// Writes are best-effort: implementations log and swallow storage failures,
/// so a `get_data` right after `set_data` may still miss.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the payload if present and not older than `ttl`.
    async fn get_data(&self, key: &str, ttl: Duration) -> Option<Value>;

    async fn get_entry(&self, key: &str) -> Option<CacheEntry>;

    async fn set_data(&self, key: &str, data: Value, options: CacheWriteOptions);

    async fn remove_data(&self, key: &str);

    async fn clear_all(&self);

    async fn get_cache_stats(&self) -> CacheStats;

    async fn keys(&self) -> Vec<String>;
}
