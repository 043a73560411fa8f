//! # Rates Adapters
//!
//! Concrete adapter implementations for the currency rates service:
//! - `memory` - in-process TTL cache implementing the `RateCache` port
//! - `feed` - reqwest HTTP client implementing the `RateFeed` port

pub mod feed;
pub mod memory;

pub use feed::HttpRateFeed;
pub use memory::MemoryRateCache;
