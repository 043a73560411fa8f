//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub provider_url: String,
    pub cache_key: String,
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let provider_url = env::var("PROVIDER_URL")
            .map_err(|_| anyhow::anyhow!("PROVIDER_URL environment variable is required"))?;

        let cache_key =
            env::var("RATES_CACHE_KEY").unwrap_or_else(|_| "exchange-rates".to_string());

        let cache_ttl_secs = env::var("RATES_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "300".to_string())
            .parse()?;

        Ok(Self {
            port,
            provider_url,
            cache_key,
            cache_ttl_secs,
        })
    }
}
