pub mod cache;
pub mod health;
pub mod sources;

pub use cache::{clear_cache, clear_source_cache, get_cache_entries, get_cache_stats};
pub use health::health_check;
pub use sources::{get_overall_status, get_sources, refresh_sources, retry_source};
