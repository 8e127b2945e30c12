//! Session Extractors

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

use crate::domain::claims::SessionClaims;
use crate::error::AuthError;
use crate::presentation::middleware::AuthStatus;

fn claims_from(parts: &Parts) -> Option<SessionClaims> {
    parts
        .extensions
        .get::<AuthStatus>()
        .and_then(|status| status.claims.clone())
}

/// Verified session of the caller; 401 when signed out
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionClaims);

impl CurrentUser {
    /// Owner id for user-scoped data
    pub fn user_id(&self) -> &str {
        &self.0.sub
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        claims_from(parts)
            .map(CurrentUser)
            .ok_or(AuthError::Unauthenticated)
    }
}

/// Session of the caller if there is one
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<SessionClaims>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(claims_from(parts)))
    }
}
