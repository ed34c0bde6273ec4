// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Client configuration loaded from environment variables.

use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Twotoo backend (no trailing slash)
    pub api_url: String,
    /// Bearer token of the signed-in user
    pub access_token: String,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            access_token: "test_access_token".to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured for local runs.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_url = env::var("TWOTOO_API_URL")
            .map_err(|_| ConfigError::Missing("TWOTOO_API_URL"))?
            .trim()
            .trim_end_matches('/')
            .to_string();

        let access_token = env::var("TWOTOO_ACCESS_TOKEN")
            .map(|v| v.trim().to_string())
            .map_err(|_| ConfigError::Missing("TWOTOO_ACCESS_TOKEN"))?;

        let timeout_secs = match env::var("TWOTOO_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("TWOTOO_TIMEOUT_SECS", raw))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url,
            access_token,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Same configuration pointed at another backend (used by tests).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
