//! Session Gate
//!
//! Classifies a request path, verifies the session credential and decides
//! whether to forward or redirect. Failed verification counts as signed out.

use std::sync::Arc;

use platform::cookie::{CookieJar, SetCookie};

use crate::application::config::GateConfig;
use crate::domain::claims::SessionClaims;
use crate::domain::policy::{GateDecision, PathClass, RoutePolicy, decide};
use crate::domain::verifier::{SessionVerifier, Verification};

/// Result of gating one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateOutcome {
    pub class: PathClass,
    pub decision: GateDecision,
    /// Redirect target including the original query string
    pub location: Option<String>,
    pub claims: Option<SessionClaims>,
    /// Cookies to attach to whatever response is returned
    pub refreshed: Vec<SetCookie>,
}

impl GateOutcome {
    pub fn is_authenticated(&self) -> bool {
        self.claims.is_some()
    }
}

pub struct SessionGate<V>
where
    V: SessionVerifier + Send + Sync + 'static,
{
    verifier: Arc<V>,
    policy: RoutePolicy,
    config: Arc<GateConfig>,
}

impl<V> SessionGate<V>
where
    V: SessionVerifier + Send + Sync + 'static,
{
    pub fn new(verifier: Arc<V>, config: Arc<GateConfig>) -> Self {
        Self {
            verifier,
            policy: config.route_policy(),
            config,
        }
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Gate a request given its path, raw query and cookies
    pub async fn evaluate(&self, path: &str, query: Option<&str>, cookies: &CookieJar) -> GateOutcome {
        let class = self.policy.classify(path);

        let Verification { claims, refreshed } = match self.verifier.verify(cookies).await {
            Ok(verification) => verification,
            Err(e) => {
                tracing::warn!(error = %e, path = %path, "Session verification failed, treating as signed out");
                Verification::anonymous()
            }
        };

        let decision = decide(class, claims.is_some());
        let location = match decision {
            GateDecision::Forward => None,
            GateDecision::RedirectToSignIn => Some(with_query(&self.config.sign_in_path, query)),
            GateDecision::RedirectToLanding => Some(with_query(&self.config.landing_path, query)),
        };

        if decision.is_redirect() {
            tracing::debug!(path = %path, ?class, ?decision, "Session gate redirect");
        }

        GateOutcome {
            class,
            decision,
            location,
            claims,
            refreshed,
        }
    }
}

fn with_query(path: &str, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_keeps_original_query() {
        assert_eq!(with_query("/auth/login", Some("tab=spells")), "/auth/login?tab=spells");
        assert_eq!(with_query("/auth/login", Some("")), "/auth/login");
        assert_eq!(with_query("/auth/login", None), "/auth/login");
    }
}
