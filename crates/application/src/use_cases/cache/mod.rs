pub mod clear;
pub mod get_stats;
pub mod list_entries;

pub use clear::ClearCacheUseCase;
pub use get_stats::GetCacheStatsUseCase;
pub use list_entries::ListCacheEntriesUseCase;
