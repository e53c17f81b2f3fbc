//! Configuration for the clients API.
//!
//! Defaults target a local development backend. Override via environment
//! variables or explicit construction.

use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/";
pub const DEFAULT_FALLBACK_ROUTE: &str = "clients";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientsConfig {
    /// API root. The resource lives at `{api_url}clients`.
    pub api_url: Url,
    /// Route the user is sent to when a single client cannot be loaded.
    pub fallback_route: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientsConfig {
    /// Configuration pointing at `api_url` with default route and timeout.
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: parse_url("api_url", api_url)?,
            fallback_route: DEFAULT_FALLBACK_ROUTE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `CLIENTS_API_URL` (default: `http://localhost:8080/api/`)
    /// - `CLIENTS_FALLBACK_ROUTE` (default: `clients`)
    /// - `CLIENTS_TIMEOUT_SECS` (default: 30; `0` counts as unset)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup("CLIENTS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Ok(Self {
            api_url: parse_url("CLIENTS_API_URL", &raw_url)?,
            fallback_route: lookup("CLIENTS_FALLBACK_ROUTE")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_FALLBACK_ROUTE.to_string()),
            timeout_secs: lookup("CLIENTS_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .filter(|&secs: &u64| secs > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}

fn parse_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
