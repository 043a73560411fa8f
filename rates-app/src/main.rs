//! # Rates Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the cache and provider-feed adapters
//! - Create the rate service
//! - Start the HTTP server

mod config;

use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rates_adapters::{HttpRateFeed, MemoryRateCache};
use rates_hex::{CacheSettings, RateService, inbound::HttpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rates_app=debug,rates_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting rates server on port {}", config.port);
    tracing::info!("Using rate provider: {}", config.provider_url);

    // Build the adapters
    let cache = MemoryRateCache::new();
    let feed = HttpRateFeed::new(config.provider_url);

    // Create the rate service
    let service = RateService::new(
        cache,
        feed,
        CacheSettings {
            key: config.cache_key,
            ttl: Duration::from_secs(config.cache_ttl_secs),
        },
    );

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
