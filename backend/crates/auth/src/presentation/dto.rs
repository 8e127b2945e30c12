//! API DTOs (Data Transfer Objects)

use serde::Serialize;

use crate::domain::claims::SessionClaims;

/// `GET /api/session`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Unix seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl From<Option<SessionClaims>> for SessionStatusResponse {
    fn from(claims: Option<SessionClaims>) -> Self {
        match claims {
            Some(claims) => Self {
                authenticated: true,
                user_id: Some(claims.sub),
                email: claims.email,
                expires_at: Some(claims.exp),
            },
            None => Self {
                authenticated: false,
                user_id: None,
                email: None,
                expires_at: None,
            },
        }
    }
}
