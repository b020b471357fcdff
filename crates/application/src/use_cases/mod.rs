pub mod cache;
pub mod health;

// Re-export use cases
pub use cache::{ClearCacheUseCase, GetCacheStatsUseCase, ListCacheEntriesUseCase};
pub use health::{
    CheckSourceUseCase, GetOverallStatusUseCase, GetSourceStatusesUseCase, RefreshAllSourcesUseCase,
    RefreshOutcome,
};
