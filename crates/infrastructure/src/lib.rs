//! SourceWatch Infrastructure Layer
pub mod cache;
pub mod http;

pub use cache::{ManualClock, MemoryCacheStore, SystemClock};
pub use http::HttpSourceProber;
