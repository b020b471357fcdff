use serde::{Deserialize, Serialize};

/// Cache store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Storage quota in bytes; oldest entries are evicted beyond it (default: 50 MiB)
    #[serde(default = "default_max_size")]
    pub max_size_bytes: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: default_max_size(),
        }
    }
}

fn default_max_size() -> usize {
    50 * 1024 * 1024
}
