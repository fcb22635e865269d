// src/config/proxy.rs
use anyhow::{anyhow, Context, Result};
use std::net::SocketAddr;
use std::time::Duration;

// --- env names ---
pub const ENV_API_KEY: &str = "ALPHA_VANTAGE_API_KEY";
pub const ENV_BASE_URL: &str = "ALPHA_VANTAGE_BASE_URL";
pub const ENV_BIND: &str = "NEWS_PROXY_BIND";
pub const ENV_TIMEOUT_SECS: &str = "NEWS_PROXY_TIMEOUT_SECS";

// --- defaults ---
/// Alpha Vantage's public placeholder key. Reported as "not configured" by /health.
pub const PLACEHOLDER_API_KEY: &str = "demo";
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
pub const DEFAULT_BIND: &str = "0.0.0.0:8001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Process-lifetime configuration. Built once at startup, shared read-only.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub api_key: String,
    pub base_url: String,
    pub bind_addr: SocketAddr,
    pub timeout: Duration,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            api_key: PLACEHOLDER_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8001)),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ProxyConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |k: &str| {
            lookup(k)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(ENV_API_KEY).unwrap_or_else(|| PLACEHOLDER_API_KEY.to_string());
        let base_url = get(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let bind_raw = get(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr: SocketAddr = bind_raw
            .parse()
            .with_context(|| format!("{ENV_BIND} is not a socket address: {bind_raw}"))?;

        let timeout_secs = match get(ENV_TIMEOUT_SECS) {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("{ENV_TIMEOUT_SECS} is not a number: {raw}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(anyhow!("{ENV_TIMEOUT_SECS} must be greater than zero"));
        }

        Ok(Self {
            api_key,
            base_url,
            bind_addr,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// True unless the key is the literal placeholder.
    pub fn key_configured(&self) -> bool {
        self.api_key != PLACEHOLDER_API_KEY
    }

    /// Key with everything but the first 8 and last 4 chars hidden.
    pub fn masked_key(&self) -> String {
        mask_key(&self.api_key)
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    // Too short to show a prefix and suffix without revealing most of it.
    if chars.len() <= 12 {
        return "*".repeat(chars.len().max(3));
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
