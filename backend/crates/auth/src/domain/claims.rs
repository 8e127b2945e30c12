//! Session Claims
//!
//! Payload carried by the session credential. `sub` identifies the user and
//! is what downstream data is scoped by.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user id)
    pub sub: String,
    /// Expiry, Unix seconds
    pub exp: i64,
    /// Issued at, Unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl SessionClaims {
    /// Claims for `sub` valid from `now` for `ttl_secs`
    pub fn new(sub: impl Into<String>, now: i64, ttl_secs: i64) -> Self {
        Self {
            sub: sub.into(),
            exp: now + ttl_secs,
            iat: Some(now),
            email: None,
            role: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }

    /// Seconds left before expiry (negative once expired)
    pub fn remaining_secs(&self, now: i64) -> i64 {
        self.exp - now
    }

    /// Same identity, new validity window
    pub fn renewed(&self, now: i64, ttl_secs: i64) -> Self {
        Self {
            exp: now + ttl_secs,
            iat: Some(now),
            ..self.clone()
        }
    }
}
