//! Auth Error Types
//!
//! This module provides session-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credential present but malformed or wrongly signed
    #[error("Session credential is invalid")]
    SessionInvalid,

    /// Credential signature valid but past its expiry
    #[error("Session has expired")]
    SessionExpired,

    /// Handler requires a session and the request has none
    #[error("Authentication required")]
    Unauthenticated,

    /// Verification could not be carried out
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::SessionInvalid | AuthError::SessionExpired | AuthError::Unauthenticated => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::SessionInvalid | AuthError::SessionExpired | AuthError::Unauthenticated => {
                ErrorKind::Unauthorized
            }
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::Internal(_) => err,
            _ => err.with_action("Sign in again"),
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::SessionInvalid => {
                tracing::warn!("Rejected malformed session credential");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        AuthError::Internal(format!("Claims serialization failed: {err}"))
    }
}
