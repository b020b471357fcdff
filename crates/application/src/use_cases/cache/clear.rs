use crate::events::{ClearScope, MonitorEvent, MonitorEventEmitter};
use crate::ports::CacheStore;
use crate::services::StatusBoard;
use sourcewatch_domain::{health_cache_key, CacheStats, DomainError};
use std::sync::Arc;
use tracing::info;

/// Use case: drop cached probe bodies for one source or for everything,
/// then report the recomputed cache statistics.
///
/// Status verdicts are left untouched; only the `cached` flag is reset.
pub struct ClearCacheUseCase {
    cache: Arc<dyn CacheStore>,
    board: Arc<StatusBoard>,
    emitter: MonitorEventEmitter,
}

impl ClearCacheUseCase {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        board: Arc<StatusBoard>,
        emitter: MonitorEventEmitter,
    ) -> Self {
        Self {
            cache,
            board,
            emitter,
        }
    }

    pub async fn execute(&self, scope: ClearScope) -> Result<CacheStats, DomainError> {
        match &scope {
            ClearScope::All => {
                self.cache.clear_all().await;
                info!("Cleared entire cache");
            }
            ClearScope::Source(id) => {
                if self.board.source(id).is_none() {
                    return Err(DomainError::SourceNotFound(id.clone()));
                }
                self.cache.remove_data(&health_cache_key(id)).await;
                info!(source = %id, "Cleared cached probe data");
            }
        }

        self.board.clear_cached(&scope);
        self.emitter.emit(MonitorEvent::CacheCleared { scope });

        Ok(self.cache.get_cache_stats().await)
    }
}
