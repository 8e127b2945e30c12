//! Character Error Types
//!
//! Character-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::CharacterId;
use thiserror::Error;

/// Character-specific result type alias
pub type CharacterResult<T> = Result<T, CharacterError>;

#[derive(Debug, Error)]
pub enum CharacterError {
    /// No character with this id belongs to the caller
    #[error("Character not found: {0}")]
    NotFound(CharacterId),

    /// Draft rejected
    #[error("Invalid character: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CharacterError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CharacterError::NotFound(_) => StatusCode::NOT_FOUND,
            CharacterError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CharacterError::Database(e) => {
                StatusCode::from_u16(AppError::classify_sqlx(e).status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            CharacterError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CharacterError::NotFound(_) => ErrorKind::NotFound,
            CharacterError::Validation(_) => ErrorKind::UnprocessableEntity,
            CharacterError::Database(e) => AppError::classify_sqlx(e).kind(),
            CharacterError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            // Database detail stays in the logs
            CharacterError::Database(e) => AppError::classify_sqlx(e),
            CharacterError::Internal(_) => AppError::internal("Internal error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CharacterError::Database(e) => {
                tracing::error!(error = %e, "Character database error");
            }
            CharacterError::Internal(msg) => {
                tracing::error!(message = %msg, "Character internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Character error");
            }
        }
    }
}

impl IntoResponse for CharacterError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CharacterError::NotFound(CharacterId::new()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CharacterError::Validation("name is required".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            CharacterError::Database(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_database_detail_is_not_exposed() {
        let err = CharacterError::Database(sqlx::Error::Protocol("secret detail".into()));
        assert_eq!(err.to_app_error().message(), "Database error");
    }
}
