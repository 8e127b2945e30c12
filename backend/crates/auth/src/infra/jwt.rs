//! HS256 Session Credential
//!
//! Verifies the cookie-borne JWT locally against the shared secret and
//! slides its expiry once less than half of the session lifetime remains.

use chrono::Utc;
use platform::cookie::{CookieConfig, CookieJar};
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use serde::{Deserialize, Serialize};

use crate::application::config::GateConfig;
use crate::domain::claims::SessionClaims;
use crate::domain::verifier::{SessionVerifier, Verification};
use crate::error::{AuthError, AuthResult};

const ALGORITHM: &str = "HS256";

#[derive(Debug, Serialize, Deserialize)]
struct JwtHeader {
    alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    typ: Option<String>,
}

#[derive(Clone)]
pub struct JwtSessionVerifier {
    secret: Vec<u8>,
    cookie: CookieConfig,
    ttl_secs: i64,
}

impl std::fmt::Debug for JwtSessionVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionVerifier")
            .field("cookie", &self.cookie.name)
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl JwtSessionVerifier {
    pub fn new(config: &GateConfig) -> Self {
        Self {
            secret: config.session_secret.clone(),
            cookie: config.session_cookie(),
            ttl_secs: config.session_ttl_secs(),
        }
    }

    /// Sign claims into a compact JWT
    pub fn issue(&self, claims: &SessionClaims) -> AuthResult<String> {
        let header = JwtHeader {
            alg: ALGORITHM.to_string(),
            typ: Some("JWT".to_string()),
        };

        let signing_input = format!(
            "{}.{}",
            to_base64url(&serde_json::to_vec(&header)?),
            to_base64url(&serde_json::to_vec(claims)?)
        );
        let signature = hmac_sha256(&self.secret, signing_input.as_bytes());

        Ok(format!("{signing_input}.{}", to_base64url(&signature)))
    }

    /// Check signature and expiry of a compact JWT at time `now`
    pub fn decode(&self, token: &str, now: i64) -> AuthResult<SessionClaims> {
        let mut parts = token.split('.');
        let (Some(header_segment), Some(payload_segment), Some(signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(AuthError::SessionInvalid);
        };

        let header: JwtHeader = decode_segment(header_segment)?;
        if header.alg != ALGORITHM {
            return Err(AuthError::SessionInvalid);
        }

        let signature = from_base64url(signature).map_err(|_| AuthError::SessionInvalid)?;
        let signing_input = format!("{header_segment}.{payload_segment}");
        if !verify_hmac_sha256(&self.secret, signing_input.as_bytes(), &signature) {
            return Err(AuthError::SessionInvalid);
        }

        let claims: SessionClaims = decode_segment(payload_segment)?;
        if claims.is_expired_at(now) {
            return Err(AuthError::SessionExpired);
        }

        Ok(claims)
    }

    /// Verify the session cookie at time `now`
    pub fn verify_at(&self, cookies: &CookieJar, now: i64) -> AuthResult<Verification> {
        let Some(token) = cookies.get(&self.cookie.name).filter(|t| !t.is_empty()) else {
            return Ok(Verification::anonymous());
        };

        let claims = self.decode(token, now)?;

        if claims.remaining_secs(now) >= self.ttl_secs / 2 {
            return Ok(Verification::authenticated(claims));
        }

        let renewed = claims.renewed(now, self.ttl_secs);
        let token = self.issue(&renewed)?;
        tracing::debug!(sub = %renewed.sub, exp = renewed.exp, "Session credential renewed");

        Ok(Verification::authenticated(renewed).with_refreshed(self.cookie.set_cookie(&token)))
    }
}

impl SessionVerifier for JwtSessionVerifier {
    async fn verify(&self, cookies: &CookieJar) -> AuthResult<Verification> {
        self.verify_at(cookies, Utc::now().timestamp())
    }
}

fn decode_segment<T: serde::de::DeserializeOwned>(segment: &str) -> AuthResult<T> {
    let bytes = from_base64url(segment).map_err(|_| AuthError::SessionInvalid)?;
    serde_json::from_slice(&bytes).map_err(|_| AuthError::SessionInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn verifier() -> JwtSessionVerifier {
        JwtSessionVerifier::new(&GateConfig {
            session_secret: b"test-secret-test-secret-test-sec".to_vec(),
            ..GateConfig::default()
        })
    }

    fn jar(token: &str) -> CookieJar {
        let mut jar = CookieJar::default();
        jar.set("sb-access-token", token);
        jar
    }

    #[test]
    fn test_issue_then_decode() {
        let verifier = verifier();
        let claims = SessionClaims::new("user-1", NOW, 3600).with_email("a@example.com");

        let token = verifier.issue(&claims).unwrap();

        assert_eq!(token.split('.').count(), 3);
        assert_eq!(verifier.decode(&token, NOW + 10).unwrap(), claims);
    }

    #[test]
    fn test_tampered_payload_is_invalid() {
        let verifier = verifier();
        let token = verifier.issue(&SessionClaims::new("user-1", NOW, 3600)).unwrap();

        let forged_payload =
            to_base64url(&serde_json::to_vec(&SessionClaims::new("admin", NOW, 3600)).unwrap());
        let parts: Vec<&str> = token.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        assert!(matches!(verifier.decode(&forged, NOW), Err(AuthError::SessionInvalid)));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = verifier().issue(&SessionClaims::new("user-1", NOW, 3600)).unwrap();
        let other = JwtSessionVerifier::new(&GateConfig::with_random_secret());

        assert!(matches!(other.decode(&token, NOW), Err(AuthError::SessionInvalid)));
    }

    #[test]
    fn test_garbage_is_invalid() {
        let verifier = verifier();
        for token in ["", "abc", "a.b", "a.b.c.d", "!!.??.**"] {
            assert!(
                matches!(verifier.decode(token, NOW), Err(AuthError::SessionInvalid)),
                "{token:?}"
            );
        }
    }

    #[test]
    fn test_other_algorithm_is_invalid() {
        let verifier = verifier();
        let header = to_base64url(br#"{"alg":"none"}"#);
        let payload = to_base64url(&serde_json::to_vec(&SessionClaims::new("u", NOW, 3600)).unwrap());
        let token = format!("{header}.{payload}.");

        assert!(matches!(verifier.decode(&token, NOW), Err(AuthError::SessionInvalid)));
    }

    #[test]
    fn test_expired_token() {
        let verifier = verifier();
        let token = verifier.issue(&SessionClaims::new("user-1", NOW - 7200, 3600)).unwrap();

        assert!(matches!(verifier.decode(&token, NOW), Err(AuthError::SessionExpired)));
    }

    #[test]
    fn test_absent_cookie_is_anonymous() {
        let verification = verifier().verify_at(&CookieJar::default(), NOW).unwrap();
        assert_eq!(verification, Verification::anonymous());
    }

    #[test]
    fn test_fresh_token_is_not_refreshed() {
        let verifier = verifier();
        let token = verifier.issue(&SessionClaims::new("user-1", NOW, 3600)).unwrap();

        let verification = verifier.verify_at(&jar(&token), NOW + 60).unwrap();

        assert_eq!(verification.claims.unwrap().sub, "user-1");
        assert!(verification.refreshed.is_empty());
    }

    #[test]
    fn test_ageing_token_is_renewed() {
        let verifier = verifier();
        let token = verifier.issue(&SessionClaims::new("user-1", NOW, 3600)).unwrap();
        let later = NOW + 2000;

        let verification = verifier.verify_at(&jar(&token), later).unwrap();

        let claims = verification.claims.unwrap();
        assert_eq!(claims.exp, later + 3600);
        assert_eq!(verification.refreshed.len(), 1);

        let cookie = &verification.refreshed[0];
        assert_eq!(cookie.name, "sb-access-token");
        assert!(cookie.header.contains("Max-Age=3600"));
        assert_eq!(verifier.decode(&cookie.value, later).unwrap(), claims);
    }
}
