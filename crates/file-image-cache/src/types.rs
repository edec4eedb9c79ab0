//! Cache types

use serde::{Deserialize, Serialize};

/// Snapshot of cache contents and counters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub total_bytes: u64,
    pub hits: u64,
    pub misses: u64,
}
