pub mod emitter;
pub mod types;

pub use emitter::MonitorEventEmitter;
pub use types::{ClearScope, MonitorEvent};
