//! Session Verifier Trait
//!
//! Interface for turning request cookies into verified claims. The JWT
//! implementation lives in the infrastructure layer.

use platform::cookie::{CookieJar, SetCookie};

use crate::domain::claims::SessionClaims;
use crate::error::AuthResult;

/// Outcome of a successful verification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verification {
    /// `None` when the request carries no session credential
    pub claims: Option<SessionClaims>,
    /// Cookies to write back (e.g. a renewed credential)
    pub refreshed: Vec<SetCookie>,
}

impl Verification {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(claims: SessionClaims) -> Self {
        Self {
            claims: Some(claims),
            refreshed: Vec::new(),
        }
    }

    pub fn with_refreshed(mut self, cookie: SetCookie) -> Self {
        self.refreshed.push(cookie);
        self
    }
}

/// Session verifier
#[trait_variant::make(SessionVerifier: Send)]
pub trait LocalSessionVerifier {
    /// Verify the session credential found in `cookies`
    ///
    /// An absent credential is `Ok` with no claims; a present but unusable
    /// one is an error.
    async fn verify(&self, cookies: &CookieJar) -> AuthResult<Verification>;
}
