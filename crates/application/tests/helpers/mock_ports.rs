#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use sourcewatch_application::ports::{CacheStore, Clock, ProbeResponse, SourceProber};
use sourcewatch_domain::{CacheEntry, CacheStats, CacheWriteOptions, DataSource, DomainError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock Clock
// ============================================================================

pub struct MockClock {
    now_ms: AtomicU64,
}

impl MockClock {
    pub fn at(now_ms: u64) -> Self {
        Self {
            now_ms: AtomicU64::new(now_ms),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now_ms
            .fetch_add(by.as_millis() as u64, Ordering::Relaxed);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::Relaxed)
    }
}

// ============================================================================
// Mock CacheStore
// ============================================================================

pub struct MockCacheStore {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    clock: Arc<MockClock>,
    drop_writes: AtomicBool,
    writes: AtomicU64,
}

impl MockCacheStore {
    pub fn new(clock: Arc<MockClock>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            clock,
            drop_writes: AtomicBool::new(false),
            writes: AtomicU64::new(0),
        }
    }

    /// Simulates a storage quota failure: writes are accepted and discarded.
    pub fn set_drop_writes(&self, drop: bool) {
        self.drop_writes.store(drop, Ordering::Relaxed);
    }

    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    pub async fn insert_at(&self, key: &str, data: Value, stored_at_ms: u64, ttl: Duration) {
        self.entries.write().await.insert(
            key.to_string(),
            CacheEntry {
                key: key.to_string(),
                size_bytes: data.to_string().len(),
                data,
                stored_at_ms,
                ttl_ms: ttl.as_millis() as u64,
                entry_type: "health-check".to_string(),
            },
        );
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    async fn get_data(&self, key: &str, ttl: Duration) -> Option<Value> {
        let now = self.clock.now_ms();
        self.entries
            .read()
            .await
            .get(key)
            .filter(|entry| !entry.is_expired_for(now, ttl.as_millis() as u64))
            .map(|entry| entry.data.clone())
    }

    async fn get_entry(&self, key: &str) -> Option<CacheEntry> {
        self.entries.read().await.get(key).cloned()
    }

    async fn set_data(&self, key: &str, data: Value, options: CacheWriteOptions) {
        self.writes.fetch_add(1, Ordering::Relaxed);
        if self.drop_writes.load(Ordering::Relaxed) {
            return;
        }
        let stored_at_ms = self.clock.now_ms();
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            CacheEntry {
                key: key.to_string(),
                size_bytes: data.to_string().len(),
                data,
                stored_at_ms,
                ttl_ms: options.ttl.as_millis() as u64,
                entry_type: options.entry_type,
            },
        );
    }

    async fn remove_data(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    async fn clear_all(&self) {
        self.entries.write().await.clear();
    }

    async fn get_cache_stats(&self) -> CacheStats {
        let entries = self.entries.read().await;
        CacheStats::from_entries(entries.values(), 1024 * 1024, self.clock.now_ms())
    }

    async fn keys(&self) -> Vec<String> {
        self.entries.read().await.keys().cloned().collect()
    }
}

// ============================================================================
// Mock SourceProber
// ============================================================================

/// Scripted answer for one source.
#[derive(Clone)]
pub enum Scripted {
    Json { delay: Duration, body: Value },
    Status { delay: Duration, status: u16, reason: &'static str },
    Fail { delay: Duration, error: DomainError },
}

pub struct MockSourceProber {
    script: Arc<RwLock<HashMap<String, Scripted>>>,
    calls: Arc<RwLock<HashMap<String, u64>>>,
}

impl MockSourceProber {
    pub fn new() -> Self {
        Self {
            script: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn script(&self, source_id: &str, answer: Scripted) {
        self.script
            .write()
            .await
            .insert(source_id.to_string(), answer);
    }

    pub async fn calls(&self, source_id: &str) -> u64 {
        self.calls
            .read()
            .await
            .get(source_id)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl SourceProber for MockSourceProber {
    async fn probe(&self, source: &DataSource) -> Result<ProbeResponse, DomainError> {
        *self
            .calls
            .write()
            .await
            .entry(source.id.clone())
            .or_insert(0) += 1;

        let answer = self.script.read().await.get(&source.id).cloned();
        match answer {
            Some(Scripted::Json { delay, body }) => {
                tokio::time::sleep(delay).await;
                Ok(ProbeResponse::Success { body })
            }
            Some(Scripted::Status {
                delay,
                status,
                reason,
            }) => {
                tokio::time::sleep(delay).await;
                Ok(ProbeResponse::HttpError {
                    status,
                    reason: reason.to_string(),
                })
            }
            Some(Scripted::Fail { delay, error }) => {
                tokio::time::sleep(delay).await;
                Err(error)
            }
            None => Err(DomainError::Network(format!(
                "no script for {}",
                source.id
            ))),
        }
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn make_source(id: &str) -> DataSource {
    DataSource::new(id, id.to_uppercase(), format!("http://localhost:5173/{id}")).unwrap()
}

pub fn fast_json(body: Value) -> Scripted {
    Scripted::Json {
        delay: Duration::from_millis(10),
        body,
    }
}

pub fn slow_json(body: Value) -> Scripted {
    Scripted::Json {
        delay: Duration::from_millis(6000),
        body,
    }
}
