use crate::data_source::source_id_from_cache_key;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// A cached payload with the metadata needed for expiry and size accounting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub key: String,
    pub data: Value,
    pub stored_at_ms: u64,
    pub ttl_ms: u64,
    pub size_bytes: usize,
    pub entry_type: String,
}

impl CacheEntry {
    /// An entry is expired once strictly more than `ttl_ms` has elapsed.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.is_expired_for(now_ms, self.ttl_ms)
    }

    /// Same check against a caller-supplied TTL (reads pass their own TTL).
    pub fn is_expired_for(&self, now_ms: u64, ttl_ms: u64) -> bool {
        now_ms.saturating_sub(self.stored_at_ms) > ttl_ms
    }

    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.stored_at_ms)
    }
}

/// Metadata of one stored entry, without its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntryInfo {
    pub key: String,
    /// Owning data source, for keys in the health namespace.
    pub source_id: Option<String>,
    pub entry_type: String,
    pub size_bytes: usize,
    pub stored_at_ms: u64,
    pub ttl_ms: u64,
    pub age_ms: u64,
    pub expired: bool,
}

impl CacheEntryInfo {
    pub fn describe(entry: &CacheEntry, now_ms: u64) -> Self {
        Self {
            key: entry.key.clone(),
            source_id: source_id_from_cache_key(&entry.key).map(str::to_string),
            entry_type: entry.entry_type.clone(),
            size_bytes: entry.size_bytes,
            stored_at_ms: entry.stored_at_ms,
            ttl_ms: entry.ttl_ms,
            age_ms: entry.age_ms(now_ms),
            expired: entry.is_expired(now_ms),
        }
    }
}

/// Options for a cache write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheWriteOptions {
    pub entry_type: String,
    pub ttl: Duration,
}

impl CacheWriteOptions {
    pub fn new(entry_type: impl Into<String>, ttl: Duration) -> Self {
        Self {
            entry_type: entry_type.into(),
            ttl,
        }
    }
}

/// Aggregate view over every entry in the cache store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub total_size: usize,
    pub max_size: usize,
    pub utilization_percent: f64,
    pub expired_count: usize,
    pub entries_by_type: BTreeMap<String, usize>,
}

impl CacheStats {
    /// Builds statistics from a snapshot of entries as of `now_ms`.
    pub fn from_entries<'a, I>(entries: I, max_size: usize, now_ms: u64) -> Self
    where
        I: IntoIterator<Item = &'a CacheEntry>,
    {
        let mut stats = Self::empty(max_size);
        for entry in entries {
            stats.record(entry, now_ms);
        }
        stats.finish()
    }

    pub fn empty(max_size: usize) -> Self {
        Self {
            max_size,
            ..Default::default()
        }
    }

    /// Accounts for one entry, classifying it against its own TTL.
    pub fn record(&mut self, entry: &CacheEntry, now_ms: u64) {
        self.total_entries += 1;
        self.total_size += entry.size_bytes;
        if entry.is_expired(now_ms) {
            self.expired_count += 1;
        }
        *self
            .entries_by_type
            .entry(entry.entry_type.clone())
            .or_insert(0) += 1;
    }

    pub fn finish(mut self) -> Self {
        self.utilization_percent = utilization(self.total_size, self.max_size);
        self
    }
}

fn utilization(total_size: usize, max_size: usize) -> f64 {
    if max_size == 0 {
        return 0.0;
    }
    let percent = (total_size as f64 / max_size as f64) * 100.0;
    (percent * 100.0).round() / 100.0
}
