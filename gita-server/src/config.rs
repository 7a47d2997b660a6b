//! Server configuration from environment variables

use anyhow::{Context, Result};
use gita_core::{Theme, UiConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Which browser origins may call the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `GITA_CORS_ORIGINS=*`
    Any,
    /// Explicit comma-separated list
    List(Vec<String>),
    /// Localhost development origins
    Development,
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// JSON catalog to serve instead of the built-in sample
    pub catalog_path: Option<PathBuf>,
    pub cors_origins: CorsOrigins,
    /// Simulated latency of the placeholder chat service
    pub chat_delay: Duration,
    pub chat_timeout: Duration,
    pub ui: UiConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            catalog_path: None,
            cors_origins: CorsOrigins::Development,
            chat_delay: Duration::from_millis(2000),
            chat_timeout: Duration::from_millis(10_000),
            ui: UiConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from `GITA_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(addr) = lookup("GITA_BIND_ADDR") {
            config.bind_addr = addr
                .parse()
                .with_context(|| format!("Invalid GITA_BIND_ADDR: {}", addr))?;
        }

        config.catalog_path = lookup("GITA_CATALOG_PATH").map(PathBuf::from);

        if let Some(origins) = lookup("GITA_CORS_ORIGINS") {
            config.cors_origins = if origins.trim() == "*" {
                CorsOrigins::Any
            } else {
                CorsOrigins::List(
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect(),
                )
            };
        }

        if let Some(ms) = lookup("GITA_CHAT_DELAY_MS") {
            config.chat_delay = parse_millis("GITA_CHAT_DELAY_MS", &ms)?;
        }
        if let Some(ms) = lookup("GITA_CHAT_TIMEOUT_MS") {
            config.chat_timeout = parse_millis("GITA_CHAT_TIMEOUT_MS", &ms)?;
        }

        if let Some(theme) = lookup("GITA_THEME") {
            let theme: Theme = theme.parse()?;
            config.ui = config.ui.with_theme(theme);
        }

        Ok(config)
    }
}

fn parse_millis(key: &str, value: &str) -> Result<Duration> {
    let ms: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid {}: {}", key, value))?;
    Ok(Duration::from_millis(ms))
}
