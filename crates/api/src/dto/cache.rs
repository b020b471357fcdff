use serde::Serialize;
use sourcewatch_domain::{CacheEntryInfo, CacheStats};
use std::collections::BTreeMap;

#[derive(Serialize, Debug, Clone)]
pub struct CacheStatsResponse {
    pub total_entries: usize,
    pub total_size: usize,
    pub max_size: usize,
    pub utilization_percent: f64,
    pub expired_count: usize,
    pub entries_by_type: BTreeMap<String, usize>,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            total_entries: stats.total_entries,
            total_size: stats.total_size,
            max_size: stats.max_size,
            utilization_percent: stats.utilization_percent,
            expired_count: stats.expired_count,
            entries_by_type: stats.entries_by_type,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct CacheEntryResponse {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    pub entry_type: String,
    pub size_bytes: usize,
    pub stored_at_ms: u64,
    pub ttl_ms: u64,
    pub age_ms: u64,
    pub expired: bool,
}

impl From<CacheEntryInfo> for CacheEntryResponse {
    fn from(info: CacheEntryInfo) -> Self {
        Self {
            key: info.key,
            source_id: info.source_id,
            entry_type: info.entry_type,
            size_bytes: info.size_bytes,
            stored_at_ms: info.stored_at_ms,
            ttl_ms: info.ttl_ms,
            age_ms: info.age_ms,
            expired: info.expired,
        }
    }
}
