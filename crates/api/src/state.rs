use sourcewatch_application::use_cases::{
    CheckSourceUseCase, ClearCacheUseCase, GetCacheStatsUseCase, GetOverallStatusUseCase,
    GetSourceStatusesUseCase, ListCacheEntriesUseCase, RefreshAllSourcesUseCase,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct AppState {
    pub get_statuses: Arc<GetSourceStatusesUseCase>,
    pub get_overall: Arc<GetOverallStatusUseCase>,
    pub refresh_all: Arc<RefreshAllSourcesUseCase>,
    pub check_source: Arc<CheckSourceUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
    pub list_cache_entries: Arc<ListCacheEntriesUseCase>,
    pub clear_cache: Arc<ClearCacheUseCase>,
    /// Cancelled on shutdown; probes started from a request stop with it.
    pub shutdown: CancellationToken,
}
