//! Rates Application Service
//!
//! Orchestrates the cache-or-fetch decision, the pair lookup, and the
//! conversion arithmetic through the cache and feed ports. Contains NO
//! infrastructure logic.

use std::time::Duration;

use rates_types::{
    ConvertRequest, CurrencyCode, ExchangeRate, RateCache, RateError, RateFeed, RateTable,
};

/// Cache placement for the rate table: the key the whole table is stored
/// under, and how long a stored table stays fresh.
#[derive(Debug, Clone)]
pub struct CacheSettings {
    pub key: String,
    pub ttl: Duration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            key: "exchange-rates".to_string(),
            ttl: Duration::from_secs(300),
        }
    }
}

/// Application service for currency conversion.
///
/// Generic over the two ports - the adapters are injected at compile time.
/// This enables:
/// - Swapping the cache or provider without code changes
/// - Testing with in-memory mocks
/// - Compile-time checks for port implementation
pub struct RateService<C: RateCache, F: RateFeed> {
    cache: C,
    feed: F,
    settings: CacheSettings,
}

impl<C: RateCache, F: RateFeed> RateService<C, F> {
    /// Creates a new rate service over the given cache and feed.
    pub fn new(cache: C, feed: F, settings: CacheSettings) -> Self {
        Self {
            cache,
            feed,
            settings,
        }
    }

    /// Returns the freshest available rate table.
    ///
    /// A cached table is returned as-is, with whatever TTL remains from the
    /// original store; on a miss the provider is called exactly once and the
    /// result is cached under the configured key. Concurrent misses may each
    /// fetch and each overwrite the entry - last writer wins, no
    /// single-flight coordination.
    pub async fn fetch_exchange_rates(&self) -> Result<RateTable, RateError> {
        if let Some(table) = self.cache.get(&self.settings.key).await {
            tracing::debug!(key = %self.settings.key, "serving rate table from cache");
            return Ok(table);
        }

        let table = match self.feed.fetch_rates().await {
            Ok(table) => table,
            Err(err) => {
                tracing::error!("provider fetch failed: {err}");
                return Err(RateError::FetchFailed(err.to_string()));
            }
        };

        self.cache
            .set(&self.settings.key, table.clone(), self.settings.ttl)
            .await;

        Ok(table)
    }

    /// Returns the quote for the (source, target) pair, in either orientation.
    ///
    /// The first structural match in table order wins among duplicates.
    pub async fn pair_rate(
        &self,
        source: CurrencyCode,
        target: CurrencyCode,
    ) -> Result<ExchangeRate, RateError> {
        let table = self.fetch_exchange_rates().await?;

        table.find_pair(source, target).copied().ok_or_else(|| {
            tracing::error!(source, target, "no rate record for requested pair");
            RateError::InvalidPair { source, target }
        })
    }

    /// Converts `req.amount` of the source currency into the target currency.
    ///
    /// Either fully succeeds with a precise number or fails with one of the
    /// two `RateError` kinds; no partial result, no rounding.
    pub async fn convert(&self, req: ConvertRequest) -> Result<f64, RateError> {
        let rate = self.pair_rate(req.source, req.target).await?;
        Ok(rate.convert_from(req.source, req.amount))
    }
}
