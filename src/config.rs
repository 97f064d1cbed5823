// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Structured JSON lines (GCP-compliant)
    Json,
    /// Human-readable compact lines for local development
    Text,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project ID hosting the Firestore database
    pub gcp_project_id: String,
    pub log_format: LogFormat,
    /// Overrides the default `EnvFilter` directives when set
    pub log_filter: Option<String>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            log_format: LogFormat::Text,
            log_filter: None,
        }
    }
}

impl Config {
    /// Offline configuration for tests.
    pub fn test_default() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let log_format = match env::var("LOG_FORMAT").as_deref() {
            Ok("text") => LogFormat::Text,
            Ok("json") | Err(_) => LogFormat::Json,
            Ok(other) => return Err(ConfigError::Invalid("LOG_FORMAT", other.to_string())),
        };

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID")
                .map_err(|_| ConfigError::Missing("GCP_PROJECT_ID"))?,
            log_format,
            log_filter: env::var("LOG_FILTER").ok().filter(|f| !f.trim().is_empty()),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
