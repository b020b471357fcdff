use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use sourcewatch_application::ports::{CacheStore, Clock};
use sourcewatch_domain::{CacheEntry, CacheStats, CacheWriteOptions};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, info, warn};

/// In-memory TTL cache with a byte quota.
///
/// Expiry is lazy: reads compare an entry's age against the caller's TTL and
/// stale entries stay in place until overwritten, removed or cleared. When a
/// write would exceed the quota, entries are evicted oldest-by-write-time
/// first until the new payload fits.
pub struct MemoryCacheStore {
    entries: DashMap<String, CacheEntry>,
    total_size: AtomicUsize,
    max_size: usize,
    clock: Arc<dyn Clock>,
    /// Serialises writers so that size accounting and eviction stay exact.
    writer: Mutex<()>,
}

impl MemoryCacheStore {
    pub fn new(max_size: usize, clock: Arc<dyn Clock>) -> Self {
        info!(max_size_bytes = max_size, "Initializing cache store");

        Self {
            entries: DashMap::new(),
            total_size: AtomicUsize::new(0),
            max_size,
            clock,
            writer: Mutex::new(()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_size(&self) -> usize {
        self.total_size.load(Ordering::Acquire)
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    fn lock_writer(&self) -> std::sync::MutexGuard<'_, ()> {
        self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_entry(&self, key: &str, data: Value, options: CacheWriteOptions) {
        let size_bytes = match serde_json::to_vec(&data) {
            Ok(bytes) => bytes.len(),
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to serialize cache payload, not caching");
                return;
            }
        };

        if size_bytes > self.max_size {
            warn!(
                key = %key,
                size_bytes,
                max_size = self.max_size,
                "Cache payload exceeds quota, not caching"
            );
            return;
        }

        let _writer = self.lock_writer();

        let replaced = self
            .entries
            .get(key)
            .map(|entry| entry.size_bytes)
            .unwrap_or(0);
        let projected = self.total_size() - replaced + size_bytes;
        if projected > self.max_size {
            self.evict_oldest(projected - self.max_size, key);
        }

        let entry = CacheEntry {
            key: key.to_string(),
            data,
            stored_at_ms: self.clock.now_ms(),
            ttl_ms: options.ttl.as_millis() as u64,
            size_bytes,
            entry_type: options.entry_type,
        };

        if let Some(old) = self.entries.insert(key.to_string(), entry) {
            self.total_size.fetch_sub(old.size_bytes, Ordering::AcqRel);
        }
        self.total_size.fetch_add(size_bytes, Ordering::AcqRel);

        debug!(key = %key, size_bytes, cache_size = self.entries.len(), "Inserted into cache");
    }

    /// Frees at least `bytes_needed` bytes, oldest writes first. `keep` is
    /// the key about to be overwritten and is never chosen.
    ///
    /// Caller must hold the writer lock.
    fn evict_oldest(&self, bytes_needed: usize, keep: &str) -> usize {
        let mut candidates: Vec<(String, u64)> = self
            .entries
            .iter()
            .filter(|entry| entry.key() != keep)
            .map(|entry| (entry.key().clone(), entry.stored_at_ms))
            .collect();
        candidates.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        let mut freed = 0;
        let mut evicted = 0;
        for (key, _) in candidates {
            if freed >= bytes_needed {
                break;
            }
            if let Some((_, entry)) = self.entries.remove(&key) {
                self.total_size.fetch_sub(entry.size_bytes, Ordering::AcqRel);
                freed += entry.size_bytes;
                evicted += 1;
            }
        }

        info!(
            evicted,
            freed_bytes = freed,
            cache_size = self.entries.len(),
            "Quota eviction completed"
        );

        evicted
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get_data(&self, key: &str, ttl: Duration) -> Option<Value> {
        let now = self.clock.now_ms();
        let entry = self.entries.get(key)?;

        if entry.is_expired_for(now, ttl.as_millis() as u64) {
            debug!(key = %key, age_ms = entry.age_ms(now), "Cache entry expired (lazy)");
            return None;
        }

        debug!(key = %key, "Cache hit");
        Some(entry.data.clone())
    }

    async fn get_entry(&self, key: &str) -> Option<CacheEntry> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    async fn set_data(&self, key: &str, data: Value, options: CacheWriteOptions) {
        self.write_entry(key, data, options);
    }

    async fn remove_data(&self, key: &str) {
        let _writer = self.lock_writer();
        if let Some((_, entry)) = self.entries.remove(key) {
            self.total_size.fetch_sub(entry.size_bytes, Ordering::AcqRel);
            debug!(key = %key, "Removed cache entry");
        }
    }

    async fn clear_all(&self) {
        let _writer = self.lock_writer();
        let removed = self.entries.len();
        self.entries.clear();
        self.total_size.store(0, Ordering::Release);
        info!(removed, "Cache cleared");
    }

    async fn get_cache_stats(&self) -> CacheStats {
        let now = self.clock.now_ms();
        let mut stats = CacheStats::empty(self.max_size);
        for entry in self.entries.iter() {
            stats.record(entry.value(), now);
        }
        stats.finish()
    }

    async fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }
}
