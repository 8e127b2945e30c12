//! Application Configuration
//!
//! Configuration for the session gate and the session credential.

use std::time::Duration;

use platform::cookie::CookieConfig;

use crate::domain::policy::RoutePolicy;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Session gate configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Paths that require a session
    pub protected_prefixes: Vec<String>,
    /// Paths an authenticated user is sent away from
    pub auth_only_prefixes: Vec<String>,
    /// Redirect target for unauthenticated access to protected paths
    pub sign_in_path: String,
    /// Redirect target for authenticated access to auth-only paths
    pub landing_path: String,
    /// Session cookie name
    pub session_cookie_name: String,
    /// HS256 key for the session credential
    pub session_secret: Vec<u8>,
    /// Session lifetime (1 hour)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            protected_prefixes: vec!["/characters".to_string()],
            auth_only_prefixes: vec!["/auth".to_string()],
            sign_in_path: "/auth/login".to_string(),
            landing_path: "/characters".to_string(),
            session_cookie_name: "sb-access-token".to_string(),
            session_secret: vec![0u8; 32],
            session_ttl: Duration::from_secs(3600),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl GateConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_bytes(32),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Get session TTL in seconds
    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl.as_secs() as i64
    }

    pub fn route_policy(&self) -> RoutePolicy {
        RoutePolicy::new(
            self.protected_prefixes.clone(),
            self.auth_only_prefixes.clone(),
        )
    }

    /// Cookie attributes for the session credential
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl_secs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GateConfig::default();
        assert_eq!(config.sign_in_path, "/auth/login");
        assert_eq!(config.landing_path, "/characters");
        assert_eq!(config.session_ttl_secs(), 3600);
    }

    #[test]
    fn test_development_config() {
        let config = GateConfig::development();
        assert!(!config.cookie_secure);
        assert_eq!(config.session_secret.len(), 32);
        assert_ne!(config.session_secret, vec![0u8; 32]);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let header = GateConfig::default()
            .session_cookie()
            .build_set_cookie("tok");
        assert!(header.starts_with("sb-access-token=tok"));
        assert!(header.contains("Max-Age=3600"));
        assert!(header.contains("Secure"));
    }
}
