use crate::events::{ClearScope, MonitorEvent, MonitorEventEmitter};
use dashmap::DashMap;
use sourcewatch_domain::{overall_status, DataSource, DataSourceStatus, OverallStatus};
use tracing::debug;

/// Holds one `DataSourceStatus` per configured source for the whole session.
///
/// Records are created `unknown` and are never removed. Each probe writes only
/// its own record, so concurrent probes need no coordination here.
pub struct StatusBoard {
    sources: Vec<DataSource>,
    statuses: DashMap<String, DataSourceStatus>,
    emitter: MonitorEventEmitter,
}

impl StatusBoard {
    pub fn new(sources: Vec<DataSource>, emitter: MonitorEventEmitter) -> Self {
        let statuses = sources
            .iter()
            .map(|source| (source.id.clone(), DataSourceStatus::unknown(source)))
            .collect();

        Self {
            sources,
            statuses,
            emitter,
        }
    }

    pub fn sources(&self) -> &[DataSource] {
        &self.sources
    }

    pub fn source(&self, id: &str) -> Option<&DataSource> {
        self.sources.iter().find(|source| source.id == id)
    }

    pub fn get(&self, id: &str) -> Option<DataSourceStatus> {
        self.statuses.get(id).map(|entry| entry.value().clone())
    }

    /// All records, in configured source order.
    pub fn snapshot(&self) -> Vec<DataSourceStatus> {
        self.sources
            .iter()
            .filter_map(|source| self.get(&source.id))
            .collect()
    }

    pub fn overall(&self) -> OverallStatus {
        overall_status(&self.snapshot())
    }

    pub fn begin_probe(&self, id: &str) {
        if let Some(mut entry) = self.statuses.get_mut(id) {
            entry.begin_probe();
            self.emitter.emit(MonitorEvent::ProbeStarted {
                source_id: id.to_string(),
            });
        }
    }

    /// Stores the result of a finished probe. Results for ids that are not
    /// configured are ignored.
    pub fn record(&self, status: DataSourceStatus) {
        match self.statuses.get_mut(&status.id) {
            Some(mut entry) => {
                *entry = status.clone();
                self.emitter.emit(MonitorEvent::ProbeCompleted { status });
            }
            None => debug!(source = %status.id, "Ignoring status for unknown source"),
        }
    }

    pub fn clear_cached(&self, scope: &ClearScope) {
        match scope {
            ClearScope::All => {
                for mut entry in self.statuses.iter_mut() {
                    entry.clear_cached();
                }
            }
            ClearScope::Source(id) => {
                if let Some(mut entry) = self.statuses.get_mut(id) {
                    entry.clear_cached();
                }
            }
        }
    }
}
