use sourcewatch_domain::DataSourceStatus;

/// Which part of the cache a clear request targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearScope {
    All,
    Source(String),
}

/// Events published by the monitor as probes and cache operations happen.
///
/// Consumers receive them through the channel handed out by
/// `MonitorEventEmitter::new_enabled`.
#[derive(Debug, Clone, PartialEq)]
pub enum MonitorEvent {
    ProbeStarted { source_id: String },

    ProbeCompleted { status: DataSourceStatus },

    /// A refresh was requested while another one was still running.
    RefreshSkipped,

    RefreshCompleted { probed: usize, elapsed_ms: u64 },

    CacheCleared { scope: ClearScope },
}

impl MonitorEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ProbeStarted { .. } => "probe_started",
            Self::ProbeCompleted { .. } => "probe_completed",
            Self::RefreshSkipped => "refresh_skipped",
            Self::RefreshCompleted { .. } => "refresh_completed",
            Self::CacheCleared { .. } => "cache_cleared",
        }
    }
}
