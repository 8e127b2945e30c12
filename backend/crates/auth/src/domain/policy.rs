//! Route Policy
//!
//! Path classification and the gate decision table. Pure functions, no I/O.

/// How a request path is treated by the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Requires a session
    Protected,
    /// Only meaningful without a session (sign-in, sign-up)
    AuthOnly,
    Public,
}

/// What the gate does with a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Forward,
    RedirectToSignIn,
    RedirectToLanding,
}

impl GateDecision {
    pub fn is_redirect(&self) -> bool {
        !matches!(self, GateDecision::Forward)
    }
}

/// Protected and auth-only prefix sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePolicy {
    protected: Vec<String>,
    auth_only: Vec<String>,
}

impl RoutePolicy {
    pub fn new(protected: Vec<String>, auth_only: Vec<String>) -> Self {
        Self {
            protected,
            auth_only,
        }
    }

    /// Classify a path. A path matching both sets is `Protected`.
    pub fn classify(&self, path: &str) -> PathClass {
        if self.protected.iter().any(|p| matches_prefix(path, p)) {
            PathClass::Protected
        } else if self.auth_only.iter().any(|p| matches_prefix(path, p)) {
            PathClass::AuthOnly
        } else {
            PathClass::Public
        }
    }
}

/// Segment-aware prefix match: `/characters` covers `/characters` and
/// `/characters/42`, not `/charactersheet`
pub fn matches_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return path.starts_with('/');
    }

    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Decision table
pub fn decide(class: PathClass, authenticated: bool) -> GateDecision {
    match (class, authenticated) {
        (PathClass::Protected, false) => GateDecision::RedirectToSignIn,
        (PathClass::AuthOnly, true) => GateDecision::RedirectToLanding,
        _ => GateDecision::Forward,
    }
}
