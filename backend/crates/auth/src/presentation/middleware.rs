//! Session Gate Middleware
//!
//! Adapts [`SessionGate`] to axum: redirects short-circuit, forwarded
//! requests carry an [`AuthStatus`] extension, and renewed session cookies
//! are written to both the forwarded request and the response. A cookie the
//! handler sets itself (logout clearing the session) is never overridden.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use platform::cookie::{CookieJar, SetCookie};

use crate::application::gate::SessionGate;
use crate::domain::claims::SessionClaims;
use crate::domain::verifier::SessionVerifier;

/// Middleware state
pub struct GateState<V>
where
    V: SessionVerifier + Send + Sync + 'static,
{
    pub gate: Arc<SessionGate<V>>,
}

impl<V> GateState<V>
where
    V: SessionVerifier + Send + Sync + 'static,
{
    pub fn new(gate: Arc<SessionGate<V>>) -> Self {
        Self { gate }
    }
}

impl<V> Clone for GateState<V>
where
    V: SessionVerifier + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
        }
    }
}

/// Authentication status stored in request extensions
#[derive(Debug, Clone, Default)]
pub struct AuthStatus {
    pub is_authenticated: bool,
    pub claims: Option<SessionClaims>,
}

/// Gate every request before it reaches a handler
pub async fn session_gate<V>(
    State(state): State<GateState<V>>,
    mut req: Request,
    next: Next,
) -> Response
where
    V: SessionVerifier + Send + Sync + 'static,
{
    let mut jar = CookieJar::from_headers(req.headers());
    let outcome = state
        .gate
        .evaluate(req.uri().path(), req.uri().query(), &jar)
        .await;

    let mut response = match outcome.location.as_deref() {
        Some(location) => Redirect::temporary(location).into_response(),
        None => {
            if !outcome.refreshed.is_empty() {
                apply_to_request(req.headers_mut(), &mut jar, &outcome.refreshed);
            }

            req.extensions_mut().insert(AuthStatus {
                is_authenticated: outcome.is_authenticated(),
                claims: outcome.claims.clone(),
            });

            next.run(req).await
        }
    };

    for cookie in &outcome.refreshed {
        if sets_cookie(response.headers(), &cookie.name) {
            tracing::debug!(cookie = %cookie.name, "Handler set cookie itself, renewal dropped");
            continue;
        }
        if let Some(value) = cookie.header_value() {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    response
}

/// Whether the response already carries a `Set-Cookie` for `name`
fn sets_cookie(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split_once('='))
        .any(|(cookie, _)| cookie.trim() == name)
}

/// Rewrite the `Cookie` header so handlers see renewed credentials
fn apply_to_request(headers: &mut HeaderMap, jar: &mut CookieJar, refreshed: &[SetCookie]) {
    for cookie in refreshed {
        jar.set(&cookie.name, &cookie.value);
    }

    headers.remove(header::COOKIE);
    if let Some(value) = jar.to_header_value() {
        headers.insert(header::COOKIE, value);
    }
}
