//! Catalog Error Types
//!
//! Catalog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Upstream answered with a non-success status
    #[error("Open5e error: {status}")]
    Upstream { status: u16 },

    /// Single-record lookup for a key the upstream does not know
    #[error("{resource} not found: {key}")]
    NotFound { resource: &'static str, key: String },

    /// Key rejected before any request was made
    #[error("Invalid catalog key: {0:?}")]
    InvalidKey(String),

    /// Connection failure, timeout, TLS error
    #[error("Open5e unreachable: {0}")]
    Transport(String),

    /// Body was not the expected JSON shape
    #[error("Unexpected Open5e payload: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Turn an upstream 404 on a single-record lookup into `NotFound`
    pub fn for_lookup(self, resource: &'static str, key: &str) -> Self {
        match self {
            CatalogError::Upstream { status: 404 } => CatalogError::NotFound {
                resource,
                key: key.to_string(),
            },
            other => other,
        }
    }

    /// Upstream status carried by this error, if any
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            CatalogError::Upstream { status } => Some(*status),
            _ => None,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Upstream { .. } | CatalogError::Decode(_) => StatusCode::BAD_GATEWAY,
            CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
            CatalogError::InvalidKey(_) => StatusCode::BAD_REQUEST,
            CatalogError::Transport(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Upstream { .. } | CatalogError::Decode(_) => ErrorKind::BadGateway,
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            CatalogError::InvalidKey(_) => ErrorKind::BadRequest,
            CatalogError::Transport(_) => ErrorKind::ServiceUnavailable,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        if self.kind().is_server_error() {
            err.with_action("Reference data is temporarily unavailable, try again later")
        } else {
            err
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Upstream { status } => {
                tracing::warn!(status = *status, "Open5e returned an error status");
            }
            CatalogError::Transport(msg) => {
                tracing::warn!(message = %msg, "Open5e unreachable");
            }
            CatalogError::Decode(msg) => {
                tracing::error!(message = %msg, "Open5e payload could not be decoded");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            CatalogError::Upstream {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Transport(err.to_string())
        }
    }
}
