//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod cache;
mod feed;

pub use cache::RateCache;
pub use feed::{FeedError, RateFeed};
