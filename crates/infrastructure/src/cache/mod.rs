pub mod clock;
pub mod store;

pub use clock::{ManualClock, SystemClock};
pub use store::MemoryCacheStore;
