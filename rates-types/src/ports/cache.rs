//! Rate-table cache port.
//!
//! The cache stores whole rate tables keyed by name. It takes no part in
//! the cache-or-fetch decision - that belongs to the caller.

use std::time::Duration;

use crate::domain::RateTable;

/// Port trait for the rate-table cache.
///
/// Expiry is evaluated lazily on `get`; there is no background sweep and
/// no active invalidation. Concurrent writers are allowed: with several
/// in-flight misses the last `set` wins.
#[async_trait::async_trait]
pub trait RateCache: Send + Sync + 'static {
    /// Returns the stored table if present and unexpired. Side-effect-free.
    async fn get(&self, key: &str) -> Option<RateTable>;

    /// Stores `table` under `key`, replacing any prior value, expiring
    /// `ttl` from now.
    async fn set(&self, key: &str, table: RateTable, ttl: Duration);
}
