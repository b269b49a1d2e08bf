use std::time::Duration;

use anyhow::{Context, Result};

use crate::upstream::WHOAMI_URL;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub huggingface_api_key: Option<String>,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            huggingface_api_key: std::env::var("HUGGINGFACE_API_KEY").ok(),
            upstream_url: std::env::var("UPSTREAM_PROBE_URL")
                .unwrap_or_else(|_| WHOAMI_URL.to_string()),
            upstream_timeout: Duration::from_secs(
                parse_env("UPSTREAM_PROBE_TIMEOUT_SECS", 10)
                    .context("UPSTREAM_PROBE_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for {key}")),
        Err(_) => Ok(default),
    }
}
