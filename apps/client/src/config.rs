use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Client configuration loaded from environment variables.
/// Every knob has a default, so `from_env()` succeeds in an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Resumate backend, no trailing slash.
    pub api_url: String,
    /// Per-request timeout applied to the shared HTTP client.
    pub request_timeout: Duration,
    /// Attempt cap for `retry_with_backoff`.
    pub max_retries: u32,
    /// Base delay for exponential backoff (delay = base * 2^attempt).
    pub retry_base_delay: Duration,
    /// Directory downloaded resumes are saved into.
    pub download_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_url: std::env::var("RESUMATE_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string())
                .trim_end_matches('/')
                .to_string(),
            request_timeout: Duration::from_secs(
                std::env::var("RESUMATE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse::<u64>()
                    .context("RESUMATE_TIMEOUT_SECS must be a number of seconds")?,
            ),
            max_retries: std::env::var("RESUMATE_MAX_RETRIES")
                .unwrap_or_else(|_| "3".to_string())
                .parse::<u32>()
                .context("RESUMATE_MAX_RETRIES must be a non-negative integer")?,
            retry_base_delay: Duration::from_millis(
                std::env::var("RESUMATE_RETRY_BASE_MS")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse::<u64>()
                    .context("RESUMATE_RETRY_BASE_MS must be a number of milliseconds")?,
            ),
            download_dir: std::env::var("RESUMATE_DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| std::env::temp_dir()),
        })
    }
}
