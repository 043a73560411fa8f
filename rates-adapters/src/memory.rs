//! In-process TTL cache adapter.

use std::time::{Duration, Instant};

use dashmap::DashMap;

use rates_types::{RateCache, RateTable};

/// In-memory implementation of the `RateCache` port.
///
/// Each entry carries its own expiry deadline; expiry is checked lazily on
/// `get`, so a stale entry simply stops being returned. Writes replace
/// whatever was there - under concurrent misses the last writer wins,
/// which is the accepted behavior of the service above.
#[derive(Default)]
pub struct MemoryRateCache {
    entries: DashMap<String, (RateTable, Instant)>,
}

impl MemoryRateCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RateCache for MemoryRateCache {
    async fn get(&self, key: &str) -> Option<RateTable> {
        let entry = self.entries.get(key)?;
        let (table, deadline) = entry.value();
        if Instant::now() < *deadline {
            Some(table.clone())
        } else {
            None
        }
    }

    async fn set(&self, key: &str, table: RateTable, ttl: Duration) {
        let deadline = Instant::now() + ttl;
        self.entries.insert(key.to_string(), (table, deadline));
    }
}
