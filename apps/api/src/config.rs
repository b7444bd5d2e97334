use anyhow::{Context, Result};

use crate::storage::redis_store::DEFAULT_STORE_KEY;

/// Application configuration loaded from environment variables.
/// Only `PORT` can fail to parse; everything else has a default or is optional.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent → resumes live in process memory.
    pub redis_url: Option<String>,
    pub store_key: String,
    /// Absent → writing assistance always returns its fallback text.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            redis_url: optional_env("REDIS_URL"),
            store_key: optional_env("RESUME_STORE_KEY")
                .unwrap_or_else(|| DEFAULT_STORE_KEY.to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            redis_url: None,
            store_key: DEFAULT_STORE_KEY.to_string(),
            anthropic_api_key: None,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

/// Unset and blank variables both read as `None`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
