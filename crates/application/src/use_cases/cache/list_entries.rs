use crate::ports::{CacheStore, Clock};
use sourcewatch_domain::CacheEntryInfo;
use std::sync::Arc;
use tracing::debug;

/// Use case: describe what the cache currently holds, one row per key.
pub struct ListCacheEntriesUseCase {
    cache: Arc<dyn CacheStore>,
    clock: Arc<dyn Clock>,
}

impl ListCacheEntriesUseCase {
    pub fn new(cache: Arc<dyn CacheStore>, clock: Arc<dyn Clock>) -> Self {
        Self { cache, clock }
    }

    /// Entries sorted by key. Keys removed between listing and lookup are skipped.
    pub async fn execute(&self) -> Vec<CacheEntryInfo> {
        let mut keys = self.cache.keys().await;
        keys.sort();

        let now_ms = self.clock.now_ms();
        let mut entries = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(entry) = self.cache.get_entry(&key).await {
                entries.push(CacheEntryInfo::describe(&entry, now_ms));
            }
        }

        debug!(count = entries.len(), "Cache entries listed");
        entries
    }
}
