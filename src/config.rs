//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before anything
//! talks to the network.
//!
//! ## Required Variables
//!
//! - `API_BASE_URL` - Origin of the short-url service, e.g.
//!   `https://s.example.com` (a trailing slash is tolerated and trimmed)
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result, bail};
use std::env;

use crate::validation::is_valid_absolute_url;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the short-url service, without a trailing slash.
    pub api_base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_BASE_URL` is missing or is not an absolute
    /// HTTP(S) URL.
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("API_BASE_URL").context("API_BASE_URL must be set")?;
        let api_base_url = api_base_url.trim_end_matches('/').to_string();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let config = Self {
            api_base_url,
            log_level,
            log_format,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the service origin is not an absolute HTTP(S) URL.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_absolute_url(&self.api_base_url) {
            bail!(
                "API_BASE_URL must be an absolute http(s) URL, got {:?}",
                self.api_base_url
            );
        }
        Ok(())
    }
}
