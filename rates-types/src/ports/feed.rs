//! Exchange-rate feed port.
//!
//! This trait defines the interface for the upstream rate provider.
//! Implementations can be HTTP clients, mock providers, etc.

use crate::domain::RateTable;

/// Error type for feed operations.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The outbound call failed: connection error, timeout, non-2xx status.
    #[error("{0}")]
    Transport(String),

    /// The call succeeded but the body is not usable as a rate table.
    #[error("Unexpected response from provider")]
    UnexpectedResponse,
}

/// Port trait for the upstream exchange-rate provider.
#[async_trait::async_trait]
pub trait RateFeed: Send + Sync + 'static {
    /// Fetches the full rate table from the provider.
    ///
    /// Exactly one attempt per call; retry policy, if any, belongs to the
    /// caller above the service.
    async fn fetch_rates(&self) -> Result<RateTable, FeedError>;
}
