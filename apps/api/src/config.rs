use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PROFILE_TX_TIMEOUT_SECS: u64 = 10;
const DEFAULT_VIEW_CACHE_CHANNEL: &str = "view-cache:invalidate";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on the profile update transaction, model call included.
    pub profile_tx_timeout: Duration,
    /// Redis channel that receives view paths to re-render.
    pub view_cache_channel: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let profile_tx_timeout_secs = match std::env::var("PROFILE_TX_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("PROFILE_TX_TIMEOUT_SECS must be a whole number of seconds")?,
            Err(_) => DEFAULT_PROFILE_TX_TIMEOUT_SECS,
        };

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: require_env("REDIS_URL")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            profile_tx_timeout: Duration::from_secs(profile_tx_timeout_secs),
            view_cache_channel: std::env::var("VIEW_CACHE_CHANNEL")
                .unwrap_or_else(|_| DEFAULT_VIEW_CACHE_CHANNEL.to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}
