//! # Rates Types
//!
//! Domain types and port traits for the currency conversion service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (ExchangeRate, Pricing, RateTable)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{CurrencyCode, ExchangeRate, Pricing, RateTable};
pub use dto::{ConvertRequest, MalformedRecord, RateRecordDto};
pub use error::{AppError, RateError};
pub use ports::{FeedError, RateCache, RateFeed};
