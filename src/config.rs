//! Centralized configuration management for notes-tui

use anyhow::{Context, Result};
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

/// Base URL used when `NOTES_API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Log file used when `NOTES_LOG_FILE` is not set
pub const DEFAULT_LOG_FILE: &str = "notes-tui.log";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the notes API; `/notes` is appended to it
    pub api_url: String,
    /// File the tracing subscriber writes to
    pub log_file: PathBuf,
    /// HTTP client configuration
    pub http: HttpConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: concat!("notes-tui/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            http: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = lookup("NOTES_API_URL").unwrap_or(defaults.api_url);
        let log_file = lookup("NOTES_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_file);

        let http = HttpConfig {
            timeout_seconds: parse_env_var("NOTES_HTTP_TIMEOUT_SECONDS", lookup("NOTES_HTTP_TIMEOUT_SECONDS"))?
                .unwrap_or(defaults.http.timeout_seconds),
            user_agent: lookup("NOTES_USER_AGENT").unwrap_or(defaults.http.user_agent),
        };

        Ok(Config {
            api_url,
            log_file,
            http,
        })
    }

    /// Replace the API base URL, e.g. from a command line flag
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Get HTTP timeout as Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    /// Parse the API base URL
    pub fn api_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.api_url)
            .with_context(|| format!("Invalid notes API URL: '{}'", self.api_url))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow::anyhow!(
                "Notes API URL must use http or https, got '{}'",
                url.scheme()
            ));
        }
        if url.cannot_be_a_base() {
            return Err(anyhow::anyhow!(
                "Notes API URL cannot be used as a base: '{}'",
                self.api_url
            ));
        }

        Ok(url)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.api_base_url()?;

        if self.http.timeout_seconds == 0 {
            return Err(anyhow::anyhow!("HTTP timeout must be at least one second"));
        }

        if self.log_file.file_name().is_none() {
            return Err(anyhow::anyhow!(
                "Log file path has no file name: {}",
                self.log_file.display()
            ));
        }

        Ok(())
    }
}

/// Helper function to parse an environment value as a specific type
fn parse_env_var<T>(var_name: &str, value: Option<String>) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match value {
        Some(val) => val.trim().parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        None => Ok(None),
    }
}
