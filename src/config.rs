//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any request is
//! issued.
//!
//! ## Required Variables
//!
//! - `ADMIN_TOKEN` - Bearer credential attached to every admin API request
//!
//! ## Optional Variables
//!
//! - `API_BASE_URL` - Admin API base URL (default: `http://localhost:5000/api`)
//! - `HTTP_TIMEOUT_SECONDS` - Per-request timeout (default: 30)
//! - `RECENT_ACTIVITY_LIMIT` - Rows shown in recent-activity lists (default: 5)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ```bash
//! export ADMIN_TOKEN="eyJhbGciOi..."
//! export API_BASE_URL="https://api.example.com/api"
//! ```

use anyhow::{Context, Result};
use std::env;

/// Console configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the admin API, without a trailing slash.
    pub api_base_url: String,
    /// Bearer credential for the admin API. Loaded from `ADMIN_TOKEN`.
    pub admin_token: String,
    /// Per-request timeout in seconds (`HTTP_TIMEOUT_SECONDS`, default: 30).
    pub http_timeout_seconds: u64,
    /// Maximum rows rendered in recent-activity and most-active-user lists
    /// (`RECENT_ACTIVITY_LIMIT`, default: 5).
    pub recent_activity_limit: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `ADMIN_TOKEN` is missing.
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api".to_string());

        let admin_token = env::var("ADMIN_TOKEN").context("ADMIN_TOKEN must be set")?;

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let recent_activity_limit = env::var("RECENT_ACTIVITY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            api_base_url,
            admin_token,
            http_timeout_seconds,
            recent_activity_limit,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_base_url` is not an http(s) URL or ends with a slash
    /// - `admin_token` is empty
    /// - `http_timeout_seconds` is zero or unreasonably large
    /// - `log_format` is not `text` or `json`
    /// - `recent_activity_limit` is out of range
    pub fn validate(&self) -> Result<()> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "API_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.api_base_url
            );
        }

        // Paths are joined as "{base}/admin/...", so a trailing slash would
        // produce double-slash URLs.
        if self.api_base_url.ends_with('/') {
            anyhow::bail!(
                "API_BASE_URL must not end with a slash, got '{}'",
                self.api_base_url
            );
        }

        if self.admin_token.is_empty() {
            anyhow::bail!("ADMIN_TOKEN must not be empty");
        }

        if self.http_timeout_seconds == 0 || self.http_timeout_seconds > 600 {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECONDS must be between 1 and 600, got {}",
                self.http_timeout_seconds
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.recent_activity_limit == 0 || self.recent_activity_limit > 50 {
            anyhow::bail!(
                "RECENT_ACTIVITY_LIMIT must be between 1 and 50, got {}",
                self.recent_activity_limit
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  API base URL: {}", self.api_base_url);
        tracing::info!("  Admin token: {}", mask_token(&self.admin_token));
        tracing::info!("  Request timeout: {}s", self.http_timeout_seconds);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a credential for logging, keeping only the last four characters.
///
/// - `"eyJhbGciOiJIUzI1NiJ9"` → `"***NiJ9"`
/// - Tokens of four characters or fewer are fully masked.
fn mask_token(token: &str) -> String {
    if token.len() <= 4 {
        return "***".to_string();
    }

    format!("***{}", &token[token.len() - 4..])
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
