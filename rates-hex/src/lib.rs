//! # Rates Hex
//!
//! Application service layer and HTTP adapter for the currency rates service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (cache-or-fetch, pair lookup, conversion)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `C: RateCache` and `F: RateFeed`, allowing
//! different cache and provider implementations to be injected.

pub mod inbound;
mod openapi;
pub mod service;


pub use service::{CacheSettings, RateService};
