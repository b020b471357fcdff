pub mod cache_store;
pub mod clock;
pub mod source_prober;

pub use cache_store::CacheStore;
pub use clock::Clock;
pub use source_prober::{ProbeResponse, SourceProber};
