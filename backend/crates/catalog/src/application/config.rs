//! Application Configuration
//!
//! Configuration for the catalog client.

use std::time::Duration;

use crate::infra::open5e::DEFAULT_BASE_URL;

/// Catalog configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Upstream base URL, without trailing slash
    pub base_url: String,
    /// `limit` for race/class/background listings; must cover the whole
    /// collection since only one page is ever requested
    pub list_limit: u32,
    /// `limit` for spell listings
    pub spell_limit: u32,
    /// Timeout applied to every outbound request
    pub request_timeout: Duration,
    /// Freshness window for memoized payloads (`None` disables the cache)
    pub cache_ttl: Option<Duration>,
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            list_limit: 100,
            spell_limit: 200,
            request_timeout: Duration::from_secs(30),
            cache_ttl: Some(Duration::from_secs(24 * 3600)), // 24 hours
            user_agent: concat!("dnd-characters/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CatalogConfig {
    /// Create config from environment variables.
    ///
    /// Reads `CATALOG_BASE_URL`, `CATALOG_CACHE_TTL_SECS` (0 disables the
    /// cache) and `CATALOG_TIMEOUT_SECS`, falling back to defaults when unset
    /// or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = std::env::var("CATALOG_BASE_URL").unwrap_or(defaults.base_url);

        let cache_ttl = match env_secs("CATALOG_CACHE_TTL_SECS") {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => defaults.cache_ttl,
        };

        let request_timeout = env_secs("CATALOG_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        Self {
            base_url,
            cache_ttl,
            request_timeout,
            ..defaults
        }
    }
}

fn env_secs(name: &str) -> Option<u64> {
    std::env::var(name).ok()?.trim().parse().ok()
}
