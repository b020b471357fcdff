use sourcewatch_application::events::{ClearScope, MonitorEvent};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Drains monitor events into the log until every sender is gone.
pub fn spawn_event_logger(mut events: mpsc::UnboundedReceiver<MonitorEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match &event {
                MonitorEvent::ProbeStarted { source_id } => {
                    debug!(event = event.name(), source = %source_id, "Monitor event");
                }
                MonitorEvent::ProbeCompleted { status } => {
                    debug!(
                        event = event.name(),
                        source = %status.id,
                        status = %status.status,
                        message = %status.message,
                        "Monitor event"
                    );
                }
                MonitorEvent::RefreshSkipped => {
                    debug!(event = event.name(), "Monitor event");
                }
                MonitorEvent::RefreshCompleted { probed, elapsed_ms } => {
                    debug!(event = event.name(), probed, elapsed_ms, "Monitor event");
                }
                MonitorEvent::CacheCleared { scope } => {
                    let target = match scope {
                        ClearScope::All => "all",
                        ClearScope::Source(id) => id.as_str(),
                    };
                    debug!(event = event.name(), scope = target, "Monitor event");
                }
            }
        }
    })
}
