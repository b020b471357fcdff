use crate::ports::CacheStore;
use sourcewatch_domain::CacheStats;
use std::sync::Arc;
use tracing::debug;

pub struct GetCacheStatsUseCase {
    cache: Arc<dyn CacheStore>,
}

impl GetCacheStatsUseCase {
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self { cache }
    }

    pub async fn execute(&self) -> CacheStats {
        let stats = self.cache.get_cache_stats().await;

        debug!(
            total_entries = stats.total_entries,
            total_size = stats.total_size,
            expired_count = stats.expired_count,
            utilization_percent = stats.utilization_percent,
            "Cache statistics calculated"
        );

        stats
    }
}
