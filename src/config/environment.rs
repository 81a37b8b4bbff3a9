// ABOUTME: Environment configuration management for the VitalFlow client
// ABOUTME: Parses environment variables into a typed ClientConfig with validated values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

//! Environment-based configuration

use crate::constants::{defaults, env_config, storage};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production backend
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// HTTP client timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,
}

impl HttpClientConfig {
    /// Whole-request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connect timeout
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
            connect_timeout_secs: defaults::CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Client configuration
#[derive(Clone)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash
    pub api_url: String,
    /// Bearer token for authenticated endpoints
    pub token: Option<String>,
    /// File holding the locally persisted favorites
    pub favorites_path: PathBuf,
    /// HTTP timeouts
    pub http: HttpClientConfig,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("favorites_path", &self.favorites_path)
            .field("http", &self.http)
            .field("log_level", &self.log_level)
            .field("environment", &self.environment)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: defaults::API_URL.to_owned(),
            token: None,
            favorites_path: default_favorites_path(),
            http: HttpClientConfig::default(),
            log_level: LogLevel::default(),
            environment: Environment::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is not an http(s) URL or a timeout is not a
    /// positive integer
    pub fn from_env() -> Result<Self> {
        let api_url = normalize_api_url(&env_var_or(env_config::API_URL, defaults::API_URL))?;

        let token = env::var(env_config::TOKEN)
            .ok()
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty());

        let favorites_path = env::var(env_config::FAVORITES_PATH)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map_or_else(default_favorites_path, PathBuf::from);

        let http = HttpClientConfig {
            timeout_secs: parse_secs(
                env_config::HTTP_TIMEOUT_SECS,
                defaults::HTTP_TIMEOUT_SECS,
            )?,
            connect_timeout_secs: parse_secs(
                env_config::CONNECT_TIMEOUT_SECS,
                defaults::CONNECT_TIMEOUT_SECS,
            )?,
        };

        let config = Self {
            api_url,
            token,
            favorites_path,
            http,
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "warn")),
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development")),
        };

        debug!(config = ?config, "Loaded client configuration");
        Ok(config)
    }

    /// Replace the backend base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not an http(s) URL
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self> {
        self.api_url = normalize_api_url(api_url)?;
        Ok(self)
    }

    /// Set the bearer token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Human readable configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "VitalFlow Client Configuration:\n\
             - API URL: {}\n\
             - Authenticated: {}\n\
             - Favorites File: {}\n\
             - HTTP Timeout: {}s (connect {}s)\n\
             - Log Level: {}\n\
             - Environment: {}",
            self.api_url,
            if self.token.is_some() { "Yes" } else { "No" },
            self.favorites_path.display(),
            self.http.timeout_secs,
            self.http.connect_timeout_secs,
            self.log_level,
            self.environment,
        )
    }
}

/// Default favorites file under the platform data directory
#[must_use]
pub fn default_favorites_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(storage::APP_DIR)
        .join(format!("{}.json", storage::FAVORITES_KEY))
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_secs(key: &str, default: u64) -> Result<u64> {
    let secs = env_var_or(key, &default.to_string())
        .trim()
        .parse::<u64>()
        .with_context(|| format!("Invalid {key} value"))?;
    if secs == 0 {
        bail!("{key} must be greater than zero");
    }
    Ok(secs)
}

fn normalize_api_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).with_context(|| format!("Invalid API URL: {trimmed}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("API URL must use http or https: {trimmed}");
    }
    Ok(trimmed.trim_end_matches('/').to_owned())
}
