use super::MonitorEvent;
use tokio::sync::mpsc;

/// Non-blocking emitter for monitor events.
///
/// Uses an unbounded channel so that probes and use cases never wait on a
/// consumer. Events are fire-and-forget: if the emitter is disabled or the
/// receiver is gone they are dropped.
#[derive(Clone)]
pub struct MonitorEventEmitter {
    sender: Option<mpsc::UnboundedSender<MonitorEvent>>,
}

impl MonitorEventEmitter {
    /// Creates a disabled emitter; `emit()` is a no-op.
    pub fn new_disabled() -> Self {
        Self { sender: None }
    }

    /// Creates an enabled emitter and returns the receiver for the consumer task.
    pub fn new_enabled() -> (Self, mpsc::UnboundedReceiver<MonitorEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { sender: Some(tx) }, rx)
    }

    pub fn emit(&self, event: MonitorEvent) {
        if let Some(ref tx) = self.sender {
            let _ = tx.send(event);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }
}

impl Default for MonitorEventEmitter {
    fn default() -> Self {
        Self::new_disabled()
    }
}

impl std::fmt::Debug for MonitorEventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitorEventEmitter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
