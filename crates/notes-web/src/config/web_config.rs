//! Web frontend configuration.
//!
//! Supports loading configuration from:
//! 1. Config file (TOML, JSON, or YAML) named by `NOTES_WEB_CONFIG`
//! 2. Environment variables
//!
//! Environment variables take precedence over config file values.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Main frontend configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// HTTP listener configuration
    pub server: ServerConfig,
    /// Notes API configuration
    pub backend: BackendConfig,
    /// Session cookie attributes
    pub cookies: CookieConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server port (default: 3000)
    pub port: u16,
    /// Bind address (default: "0.0.0.0")
    pub bind: String,
}

/// Notes API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL every API path is appended to (default: "http://localhost:3123/api")
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

/// Cookie configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieConfig {
    /// Mark session cookies `Secure` (default: true, disable for local http)
    pub secure: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            bind: "0.0.0.0".to_string(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3123/api".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self { secure: true }
    }
}

impl WebConfig {
    /// Load configuration from file and environment variables.
    /// Environment variables override file values.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(config_path) = std::env::var("NOTES_WEB_CONFIG") {
            config = Self::from_file(&config_path)?;
            tracing::info!("Loaded configuration from: {}", config_path);
        }

        config.apply_overrides(|key| std::env::var(key).ok());

        Ok(config)
    }

    /// Load configuration from a file (supports TOML, JSON, YAML)
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let config: WebConfig = match extension {
            "toml" => toml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            _ => {
                if content.trim().starts_with('{') {
                    serde_json::from_str(&content)?
                } else if content.contains("---") || content.contains(": ") {
                    serde_yaml::from_str(&content)?
                } else {
                    toml::from_str(&content)?
                }
            }
        };

        Ok(config)
    }

    /// Apply overrides read through `lookup` (the process environment in production)
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(port) = lookup("NOTES_WEB_PORT").and_then(|v| v.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = lookup("NOTES_WEB_BIND") {
            self.server.bind = val;
        }

        if let Some(val) = lookup("NOTES_API_BASE_URL") {
            self.backend.base_url = val;
        }
        if let Some(secs) = lookup("NOTES_API_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.backend.timeout_secs = secs;
        }

        if let Some(val) = lookup("NOTES_WEB_COOKIE_SECURE") {
            self.cookies.secure = val.parse().unwrap_or(true);
        }
    }

    /// Listener address suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }

    /// Parsed notes API base URL
    pub fn backend_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.backend.base_url)
    }

    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend.timeout_secs)
    }
}
