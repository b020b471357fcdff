pub mod cache;
pub mod source;

pub use cache::{CacheEntryResponse, CacheStatsResponse};
pub use source::{OverallStatusResponse, RefreshResponse, SourceStatusResponse};
