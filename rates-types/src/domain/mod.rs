//! Domain models for the currency rates service.

pub mod rate;

pub use rate::{CurrencyCode, ExchangeRate, Pricing, RateTable};
